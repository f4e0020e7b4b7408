use std::sync::mpsc;

use crate::assist::{AssistClient, AssistKind, AssistOutcome};
use crate::catalog::{self, Topics};
use crate::model::{AppState, ChatMessage};
use crate::scoring::Summary;
use crate::session::Session;

// Submódulos
pub mod actions;
pub mod assist;
pub mod queries;
pub mod view_models;

/// Texto inicial del panel de asistencia en cada pregunta.
pub const AI_BOX_IDLE: &str = "כאן יופיע רמז/הסבר";

/// Burbuja inicial del chat en cada pregunta.
pub const CHAT_WELCOME: &str = "שאל 2 שאלות על השאלה הזו — אני אתן הכוונה.";

/// Pedido de asistencia en vuelo. Mientras exista, la UI deshabilita los
/// controles que lo disparan.
pub struct PendingAssist {
    pub kind: AssistKind,
}

/// Mensaje que el hilo de red manda de vuelta al loop de la UI.
type AssistDelivery = (u64, u64, AssistKind, AssistOutcome);

pub struct TriviaApp {
    pub topics: Topics,
    pub catalog_failed: bool,

    pub state: AppState,
    pub selected_topic: Option<String>,
    pub session: Option<Session>,
    pub summary: Option<Summary>,

    /// Aviso en la pantalla de temas (p. ej. tema sin preguntas).
    pub message: String,
    /// Panel de pista/explicación de la pregunta actual.
    pub ai_box: String,
    /// Burbujas mostradas en el chat (incluye avisos de error y de cupo).
    pub chat_log: Vec<ChatMessage>,
    pub chat_input: String,

    pub assist_client: AssistClient,
    pending_assist: Option<PendingAssist>,
    assist_rx: Option<mpsc::Receiver<AssistDelivery>>,
    /// Sube al reemplazar la sesión; un resultado con generación vieja se tira.
    generation: u64,
    /// Sube al cambiar de pregunta; un resultado tardío no pisa el panel.
    question_epoch: u64,
}

impl TriviaApp {
    /// Arranque normal: una única carga del catálogo. Si falla, la app queda
    /// en el estado terminal "sin temas" (sin reintentos).
    pub fn new() -> Self {
        let base = catalog::api_base();
        let (topics, catalog_failed) = match catalog::load_catalog(&base) {
            Ok(topics) => (topics, false),
            Err(err) => {
                log::error!("no se pudo cargar el catálogo: {err}");
                (Topics::new(), true)
            }
        };
        Self::with_topics(topics, catalog_failed, AssistClient::new(base))
    }

    pub fn with_topics(topics: Topics, catalog_failed: bool, assist_client: AssistClient) -> Self {
        let selected_topic = topics.keys().next().cloned();
        Self {
            topics,
            catalog_failed,
            state: AppState::TopicSelect,
            selected_topic,
            session: None,
            summary: None,
            message: String::new(),
            ai_box: AI_BOX_IDLE.to_string(),
            chat_log: Vec::new(),
            chat_input: String::new(),
            assist_client,
            pending_assist: None,
            assist_rx: None,
            generation: 0,
            question_epoch: 0,
        }
    }
}
