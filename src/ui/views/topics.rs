use egui::{Context, RichText};

use crate::TriviaApp;
use crate::ui::layout::centered_panel;
use crate::view_models::label_topic;

pub fn ui_topic_select(app: &mut TriviaApp, ctx: &Context) {
    centered_panel(ctx, 280.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            if app.catalog_failed {
                // Estado terminal: el catálogo no cargó y no se reintenta.
                ui.heading("שגיאה בטעינת נושאים");
                return;
            }

            let names = app.topic_names();
            if names.is_empty() {
                ui.heading("אין נושאים זמינים");
                return;
            }

            ui.heading("בחר נושא");
            ui.add_space(16.0);

            let mut selected = app
                .selected_topic
                .clone()
                .unwrap_or_else(|| names[0].clone());

            egui::ComboBox::from_id_salt("topic_select")
                .width(220.0)
                .selected_text(label_topic(&selected).to_string())
                .show_ui(ui, |ui| {
                    for name in &names {
                        ui.selectable_value(&mut selected, name.clone(), label_topic(name));
                    }
                });
            app.selected_topic = Some(selected);

            ui.add_space(16.0);
            if ui.button("התחל משחק (10 שאלות)").clicked() {
                app.start_game();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&app.message)
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            }

            ui.add_space(10.0);
            ui.small("אחרי שתתחיל משחק: רמז/הסבר/צ'אט.");
        });
    });
}
