use super::*;
use crate::model::Question;
use crate::view_models::label_topic;

impl TriviaApp {
    // Accesores seguros para las vistas

    pub fn topic_names(&self) -> Vec<String> {
        self.topics.keys().cloned().collect()
    }

    pub fn current_question_cloned(&self) -> Option<Question> {
        self.session
            .as_ref()
            .and_then(|s| s.current_question().cloned())
    }

    /// "שאלה N / M" de la barra superior.
    pub fn progress_label(&self) -> String {
        match &self.session {
            Some(s) => format!("שאלה {} / {}", s.question_number(), s.total()),
            None => String::new(),
        }
    }

    pub fn topic_label(&self) -> String {
        match &self.session {
            Some(s) => label_topic(s.topic()).to_string(),
            None => String::new(),
        }
    }

    pub fn question_answered(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.answered())
    }
}
