use super::*;
use crate::scoring;
use crate::session::{Advanced, SessionError};

impl TriviaApp {
    /// Confirma el tema elegido y arranca la partida.
    pub fn start_game(&mut self) {
        let Some(topic) = self.selected_topic.clone() else {
            return;
        };

        match Session::start(&topic, &self.topics) {
            Ok(session) => {
                // Sesión nueva: cualquier pedido pendiente de la anterior se descarta.
                self.generation += 1;
                self.drop_pending_assist();
                self.session = Some(session);
                self.summary = None;
                self.message.clear();
                self.state = AppState::Quiz;
                self.prepare_question();
            }
            Err(err) => {
                log::warn!("no se pudo arrancar la partida: {err}");
                self.message = "אין שאלות לנושא הזה".into();
            }
        }
    }

    /// Click en una opción. El motor ignora envíos repetidos.
    pub fn answer(&mut self, choice: usize) {
        if let Some(session) = self.session.as_mut() {
            session.submit_answer(choice);
        }
    }

    /// Pasa a la siguiente pregunta o, si era la última, cierra la partida y
    /// calcula el resumen.
    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.advance() {
            Ok(Advanced::Next) => {
                self.question_epoch += 1;
                self.prepare_question();
            }
            Ok(Advanced::Complete) => {
                self.question_epoch += 1;
                self.summary = Some(scoring::score(
                    session.total(),
                    session.mistakes().to_vec(),
                    session.used_help(),
                ));
                self.state = AppState::Summary;
            }
            Err(SessionError::AnswerPending) => {
                // El botón va deshabilitado hasta responder; esto es el guard local.
                self.ai_box = "ענה קודם על השאלה".into();
            }
            Err(err) => log::warn!("advance rechazado: {err}"),
        }
    }

    /// Vuelve al selector de temas descartando la sesión en curso. Un pedido
    /// de asistencia en vuelo ya no puede tocar la sesión reemplazada.
    pub fn back_to_topics(&mut self) {
        self.generation += 1;
        self.drop_pending_assist();
        self.session = None;
        self.summary = None;
        self.message.clear();
        self.state = AppState::TopicSelect;
    }

    /// "Jugar otra vez" desde el resumen: mismo flujo que volver a temas.
    pub fn play_again(&mut self) {
        self.back_to_topics();
    }

    /// Estado por pregunta de la capa de presentación.
    pub(crate) fn prepare_question(&mut self) {
        self.ai_box = AI_BOX_IDLE.to_string();
        self.chat_log = vec![ChatMessage::assistant(CHAT_WELCOME)];
        self.chat_input.clear();
    }
}
