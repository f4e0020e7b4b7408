//! Motor de la partida: selección de tema, pool barajado de 10 preguntas,
//! estado por pregunta y contadores acumulados. No conoce la capa de dibujo.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::catalog::Topics;
use crate::model::{ChatMessage, Mistake, Question};

/// Tamaño máximo del pool por partida.
pub const POOL_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("topic has no questions: {0}")]
    NoQuestionsForTopic(String),
    #[error("answer the current question before advancing")]
    AnswerPending,
    #[error("an answer is required before asking for an explanation")]
    AnswerRequired,
}

/// Resultado de `advance`: o hay otra pregunta, o la partida terminó.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advanced {
    Next,
    Complete,
}

#[derive(Debug, Clone)]
pub struct Session {
    topic: String,
    pool: Vec<Question>,
    current: usize,
    answered: bool,
    selected: Option<usize>,
    mistakes: Vec<Mistake>,
    used_help: bool,
    chat_history: Vec<ChatMessage>,
}

impl Session {
    /// Arranca una partida para `topic`: baraja la lista completa del tema y
    /// se queda con las primeras `POOL_SIZE` (o todas si hay menos).
    pub fn start(topic: &str, topics: &Topics) -> Result<Self, SessionError> {
        Self::start_with_rng(topic, topics, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        topic: &str,
        topics: &Topics,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let bank = topics
            .get(topic)
            .filter(|qs| !qs.is_empty())
            .ok_or_else(|| SessionError::NoQuestionsForTopic(topic.to_string()))?;

        let mut pool = bank.clone();
        pool.shuffle(rng);
        pool.truncate(POOL_SIZE);

        Ok(Self {
            topic: topic.to_string(),
            pool,
            current: 0,
            answered: false,
            selected: None,
            mistakes: Vec::new(),
            used_help: false,
            chat_history: Vec::new(),
        })
    }

    /// Registra la respuesta del usuario. La segunda llamada y siguientes para
    /// la misma pregunta se ignoran: la primera elección manda.
    pub fn submit_answer(&mut self, choice: usize) {
        if self.answered {
            return;
        }
        let Some(q) = self.pool.get(self.current) else {
            return;
        };

        self.answered = true;
        self.selected = Some(choice);

        if choice != q.correct_index {
            self.mistakes.push(Mistake {
                question_number: self.current + 1,
                question_text: q.question.clone(),
                chosen_text: q.choice_text(choice),
                correct_text: q.correct_text(),
            });
        }
    }

    /// Pasa a la siguiente pregunta. Requiere haber respondido la actual;
    /// resetea el estado por pregunta (respuesta, elección, chat).
    pub fn advance(&mut self) -> Result<Advanced, SessionError> {
        if !self.answered {
            return Err(SessionError::AnswerPending);
        }

        self.current += 1;
        self.answered = false;
        self.selected = None;
        self.chat_history.clear();

        if self.current >= self.pool.len() {
            Ok(Advanced::Complete)
        } else {
            Ok(Advanced::Next)
        }
    }

    /// Índice elegido para la pregunta actual, o `AnswerRequired` si todavía
    /// no se respondió. Guard local para "explicar": sin red de por medio.
    pub fn require_answered(&self) -> Result<usize, SessionError> {
        self.selected.ok_or(SessionError::AnswerRequired)
    }

    /// Cualquier uso de ayuda (pista/explicación/chat) deja marca para toda la
    /// partida, incluida una respuesta de cupo agotado.
    pub fn mark_help_used(&mut self) {
        self.used_help = true;
    }

    pub fn replace_chat_history(&mut self, history: Vec<ChatMessage>) {
        // El backend es la fuente de verdad del hilo: se reemplaza, no se mezcla.
        self.chat_history = history;
    }

    // Accesores

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.pool.get(self.current)
    }

    /// Número 1-based de la pregunta actual.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    pub fn used_help(&self) -> bool {
        self.used_help
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.pool.len()
    }
}
