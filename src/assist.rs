//! Cliente del backend de asistencia (pista / explicación / chat).
//!
//! Normaliza las tres salidas posibles del backend en un único
//! [`AssistOutcome`]: texto de respuesta, cupo agotado o fallo. El que llama
//! nunca recibe un error de transporte sin convertir.

use serde::{Deserialize, Serialize};

use crate::model::{ChatMessage, Question};

/// Mensaje fijo con el que se pide una pista por el endpoint de chat.
const HINT_PROMPT: &str = "תן רמז בלי לגלות תשובה";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistKind {
    Hint,
    Explain,
    Chat,
}

/// Resultado normalizado de cualquier pedido de asistencia.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistOutcome {
    Answered {
        text: String,
        /// Hilo devuelto por el servidor (solo chat); reemplaza al local.
        history: Option<Vec<ChatMessage>>,
        usage_count: Option<u32>,
        max_usage: Option<u32>,
    },
    /// Cupo agotado: `text` es el aviso para el usuario, no contenido del juego.
    LimitReached { text: String },
    /// Error de red o del servidor; sin reintentos automáticos.
    Failed { reason: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    question: &'a Question,
    user_message: &'a str,
    history: &'a [ChatMessage],
    is_hint: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainRequest<'a> {
    question: &'a Question,
    user_answer_index: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AssistResponse {
    text: Option<String>,
    history: Option<Vec<ChatMessage>>,
    usage_count: Option<u32>,
    max_usage: Option<u32>,
    limit_reached: bool,
    error: Option<String>,
    details: Option<String>,
}

fn normalize(status_ok: bool, resp: AssistResponse) -> AssistOutcome {
    if !status_ok {
        return AssistOutcome::Failed {
            reason: resp
                .details
                .or(resp.error)
                .unwrap_or_else(|| "שגיאה".into()),
        };
    }

    if resp.limit_reached {
        return AssistOutcome::LimitReached {
            text: resp.text.unwrap_or_default(),
        };
    }

    AssistOutcome::Answered {
        text: resp.text.unwrap_or_else(|| "אין תשובה".into()),
        history: resp.history,
        usage_count: resp.usage_count,
        max_usage: resp.max_usage,
    }
}

#[derive(Clone)]
pub struct AssistClient {
    base: String,
    client: reqwest::blocking::Client,
}

impl AssistClient {
    pub fn new(base: String) -> Self {
        Self {
            base,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Una pista es un chat con mensaje fijo, historial vacío e `isHint`.
    pub fn hint(&self, question: &Question) -> AssistOutcome {
        self.post(
            "chat/",
            &ChatRequest {
                question,
                user_message: HINT_PROMPT,
                history: &[],
                is_hint: true,
            },
        )
    }

    pub fn chat(
        &self,
        question: &Question,
        user_message: &str,
        history: &[ChatMessage],
    ) -> AssistOutcome {
        self.post(
            "chat/",
            &ChatRequest {
                question,
                user_message,
                history,
                is_hint: false,
            },
        )
    }

    pub fn explain(&self, question: &Question, user_answer_index: usize) -> AssistOutcome {
        self.post(
            "explain/",
            &ExplainRequest {
                question,
                user_answer_index,
            },
        )
    }

    fn post<T: Serialize>(&self, path: &str, payload: &T) -> AssistOutcome {
        let url = format!("{}/{path}", self.base.trim_end_matches('/'));

        let response = match self.client.post(&url).json(payload).send() {
            Ok(r) => r,
            Err(err) => {
                log::warn!("pedido de asistencia falló: {err}");
                return AssistOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        let status_ok = response.status().is_success();
        match response.json::<AssistResponse>() {
            Ok(body) => normalize(status_ok, body),
            Err(err) => AssistOutcome::Failed {
                reason: format!("respuesta JSON inválida del backend: {err}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            question: "מי כתב את האיליאדה?".into(),
            choices: vec!["הומרוס".into(), "סוקרטס".into()],
            correct_index: 0,
        }
    }

    #[test]
    fn chat_request_uses_the_wire_field_names() {
        let q = question();
        let history = vec![ChatMessage::user("שלום")];
        let value = serde_json::to_value(ChatRequest {
            question: &q,
            user_message: "עוד רמז?",
            history: &history,
            is_hint: true,
        })
        .unwrap();

        assert_eq!(value["userMessage"], "עוד רמז?");
        assert_eq!(value["isHint"], true);
        assert_eq!(value["question"]["correctIndex"], 0);
        assert_eq!(value["history"][0]["role"], "user");
    }

    #[test]
    fn explain_request_carries_the_answer_index() {
        let q = question();
        let value = serde_json::to_value(ExplainRequest {
            question: &q,
            user_answer_index: 1,
        })
        .unwrap();
        assert_eq!(value["userAnswerIndex"], 1);
    }

    #[test]
    fn normalize_success_with_usage_counters() {
        let resp: AssistResponse = serde_json::from_str(
            r#"{"text": "רמז", "usageCount": 1, "maxUsage": 1}"#,
        )
        .unwrap();
        assert_eq!(
            normalize(true, resp),
            AssistOutcome::Answered {
                text: "רמז".into(),
                history: None,
                usage_count: Some(1),
                max_usage: Some(1),
            }
        );
    }

    #[test]
    fn normalize_chat_success_returns_server_history() {
        let resp: AssistResponse = serde_json::from_str(
            r#"{"text": "תשובה", "history": [{"role": "user", "content": "שאלה"},
                {"role": "assistant", "content": "תשובה"}]}"#,
        )
        .unwrap();
        match normalize(true, resp) {
            AssistOutcome::Answered { history, .. } => {
                let history = history.unwrap();
                assert_eq!(history.len(), 2);
                assert!(history[0].is_user());
            }
            other => panic!("esperaba Answered, vino {other:?}"),
        }
    }

    #[test]
    fn normalize_limit_reached_even_with_counters() {
        let resp: AssistResponse = serde_json::from_str(
            r#"{"limitReached": true, "text": "נגמרו הרמזים", "usageCount": 1, "maxUsage": 1}"#,
        )
        .unwrap();
        assert_eq!(
            normalize(true, resp),
            AssistOutcome::LimitReached {
                text: "נגמרו הרמזים".into()
            }
        );
    }

    #[test]
    fn normalize_error_prefers_details_over_error() {
        let resp: AssistResponse =
            serde_json::from_str(r#"{"error": "boom", "details": "timeout upstream"}"#).unwrap();
        assert_eq!(
            normalize(false, resp),
            AssistOutcome::Failed {
                reason: "timeout upstream".into()
            }
        );

        let resp: AssistResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(
            normalize(false, resp),
            AssistOutcome::Failed {
                reason: "boom".into()
            }
        );
    }

    #[test]
    fn normalize_error_without_body_uses_a_generic_reason() {
        let resp = AssistResponse::default();
        assert!(matches!(normalize(false, resp), AssistOutcome::Failed { .. }));
    }
}
