// src/catalog.rs

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Question;

/// Catálogo de temas: nombre → lista ordenada de preguntas.
pub type Topics = BTreeMap<String, Vec<Question>>;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/trivia";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("questions endpoint unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("questions endpoint returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("questions payload is not a topic map")]
    BadPayload,
}

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    topics: Topics,
}

/// Base del API (catálogo + asistencia), configurable por entorno.
pub fn api_base() -> String {
    std::env::var("TRIVIA_API_BASE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Única carga del catálogo al arrancar. Sin reintentos: si falla,
/// el llamador muestra el estado terminal "sin temas".
pub fn load_catalog(base: &str) -> Result<Topics, CatalogError> {
    let url = format!("{}/questions/", base.trim_end_matches('/'));
    log::info!("cargando catálogo desde {url}");

    let client = reqwest::blocking::Client::new();
    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(CatalogError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    parse_catalog(&body)
}

pub fn parse_catalog(body: &str) -> Result<Topics, CatalogError> {
    let payload: CatalogPayload =
        serde_json::from_str(body).map_err(|_| CatalogError::BadPayload)?;
    Ok(payload.topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_reads_topic_map() {
        let body = r#"{
            "topics": {
                "Python": [
                    {"question": "מה מדפיס print(2**3)?", "choices": ["6", "8", "9"], "correctIndex": 1}
                ],
                "History": []
            }
        }"#;
        let topics = parse_catalog(body).unwrap();
        assert_eq!(topics.len(), 2);
        let python = &topics["Python"];
        assert_eq!(python.len(), 1);
        assert_eq!(python[0].correct_index, 1);
        assert_eq!(python[0].choices[1], "8");
    }

    #[test]
    fn parse_catalog_rejects_non_mapping_payload() {
        assert!(matches!(
            parse_catalog(r#"{"topics": [1, 2, 3]}"#),
            Err(CatalogError::BadPayload)
        ));
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::BadPayload)
        ));
        assert!(matches!(
            parse_catalog(r#"{"error": "boom"}"#),
            Err(CatalogError::BadPayload)
        ));
    }
}
