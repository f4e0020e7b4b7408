use egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::TriviaApp;
use crate::model::AppState;
use crate::ui::layout::two_button_row;
use crate::view_models::{badge_emoji, badge_message};

pub fn ui_summary(app: &mut TriviaApp, ctx: &Context) {
    let Some(summary) = app.summary.clone() else {
        app.state = AppState::TopicSelect;
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let max_width = 520.0;
                let panel_width = (ui.available_width() * 0.97).min(max_width);

                egui::Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(24, 20))
                    .show(ui, |ui| {
                        ui.set_width(panel_width);

                        ui.label(RichText::new(badge_emoji(summary.tier)).size(48.0));
                        ui.add_space(6.0);
                        ui.heading("🎉 סיימת!");
                        ui.add_space(8.0);

                        ui.label(format!(
                            "ענית נכון {} מתוך {}",
                            summary.correct, summary.total
                        ));
                        ui.add_space(8.0);

                        ui.group(|ui| {
                            ui.set_width(panel_width - 16.0);
                            ui.label(badge_message(summary.tier));
                        });

                        ui.add_space(4.0);
                        ui.small(if summary.used_help {
                            "* השתמשת בעזרה במהלך המשחק"
                        } else {
                            "* לא השתמשת בעזרה במהלך המשחק"
                        });

                        ui.add_space(10.0);

                        if summary.mistakes.is_empty() {
                            ui.label("אין טעויות 🎉");
                        } else {
                            ui.separator();
                            ui.label(RichText::new("במה הייתה הטעות?").strong());
                            ui.add_space(6.0);

                            ScrollArea::vertical()
                                .id_salt("mistakes")
                                .max_height(260.0)
                                .auto_shrink([false, true])
                                .show(ui, |ui| {
                                    for m in &summary.mistakes {
                                        ui.group(|ui| {
                                            ui.set_width(panel_width - 32.0);
                                            ui.small(format!("שאלה {}", m.question_number));
                                            ui.label(RichText::new(&m.question_text).strong());
                                            ui.label(
                                                RichText::new(format!("בחרת: {}", m.chosen_text))
                                                    .color(egui::Color32::LIGHT_RED),
                                            );
                                            ui.label(
                                                RichText::new(format!("נכון: {}", m.correct_text))
                                                    .color(egui::Color32::LIGHT_GREEN),
                                            );
                                        });
                                        ui.add_space(6.0);
                                    }
                                });
                        }

                        ui.add_space(14.0);
                        let (again, back) =
                            two_button_row(ui, panel_width, "שחק שוב", "↩ חזרה לנושאים");
                        if again {
                            app.play_again();
                        }
                        if back {
                            app.back_to_topics();
                        }
                    });
            });
        });
    });
}
