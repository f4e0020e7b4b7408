use serde::{Deserialize, Serialize};

/// Una pregunta de trivia tal como llega del catálogo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
}

impl Question {
    /// Texto de la opción `i`, o "-" si el índice no existe.
    pub fn choice_text(&self, i: usize) -> String {
        self.choices.get(i).cloned().unwrap_or_else(|| "-".into())
    }

    pub fn correct_text(&self) -> String {
        self.choice_text(self.correct_index)
    }
}

/// Mensaje del historial de chat (formato del backend: role + content).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Fallo registrado durante la partida, para el resumen final.
#[derive(Debug, Clone, PartialEq)]
pub struct Mistake {
    pub question_number: usize, // 1-based
    pub question_text: String,
    pub chosen_text: String,
    pub correct_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    TopicSelect,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::TopicSelect
    }
}
