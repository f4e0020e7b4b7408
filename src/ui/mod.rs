pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::TriviaApp;
use crate::model::AppState;

impl App for TriviaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultados de asistencia pendientes (si los hay)
        self.poll_assist();
        if self.assist_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::TopicSelect => views::topics::ui_topic_select(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }
    }
}
