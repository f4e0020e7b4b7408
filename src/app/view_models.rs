use super::*;
use crate::view_models::{AnswerChoice, ChoiceState};

impl TriviaApp {
    /// Filas de respuesta de la pregunta actual, con su estado visual:
    /// tras responder se marca siempre la correcta y, si la elegida no lo era,
    /// también la equivocada.
    pub fn answer_rows(&self) -> Vec<AnswerChoice> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let Some(q) = session.current_question() else {
            return Vec::new();
        };

        q.choices
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let state = if !session.answered() {
                    ChoiceState::Idle
                } else if i == q.correct_index {
                    ChoiceState::Correct
                } else if session.selected() == Some(i) {
                    ChoiceState::Wrong
                } else {
                    ChoiceState::Dimmed
                };
                AnswerChoice {
                    text: text.clone(),
                    state,
                }
            })
            .collect()
    }
}
