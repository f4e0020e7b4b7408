use egui::{Button, CentralPanel, Color32, Context, Key, RichText, ScrollArea, TextEdit, Vec2};

use crate::TriviaApp;
use crate::model::AppState;
use crate::view_models::ChoiceState;

pub fn ui_quiz(app: &mut TriviaApp, ctx: &Context) {
    // Sin sesión no hay nada que dibujar: volvemos al selector
    let Some(question) = app.current_question_cloned() else {
        app.state = AppState::TopicSelect;
        return;
    };

    let progress = app.progress_label();
    let topic = app.topic_label();
    let rows = app.answer_rows();
    let answered = app.question_answered();
    let pending = app.assist_pending();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let max_width = 650.0;
                let panel_width = (ui.available_width() * 0.97).min(max_width);

                egui::Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.set_width(panel_width);

                        // Barra superior: progreso + tema
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&progress).weak());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new(format!("נושא: {topic}")).weak());
                                },
                            );
                        });
                        ui.add_space(10.0);

                        ui.label(RichText::new(&question.question).heading());
                        ui.add_space(12.0);

                        // Opciones: tras responder se bloquean y se colorean
                        let mut clicked_choice = None;
                        for (i, row) in rows.iter().enumerate() {
                            let mut button =
                                Button::new(&row.text).min_size(Vec2::new(panel_width, 34.0));
                            button = match row.state {
                                ChoiceState::Correct => button.fill(Color32::DARK_GREEN),
                                ChoiceState::Wrong => button.fill(Color32::DARK_RED),
                                _ => button,
                            };
                            if ui.add_enabled(!answered, button).clicked() {
                                clicked_choice = Some(i);
                            }
                            ui.add_space(4.0);
                        }
                        if let Some(choice) = clicked_choice {
                            app.answer(choice);
                        }

                        ui.add_space(10.0);

                        // Acciones. "Explicar" y "Siguiente" se habilitan al responder;
                        // pista/explicación quedan bloqueadas mientras hay un pedido en vuelo.
                        ui.horizontal(|ui| {
                            if ui.add_enabled(!pending, Button::new("💡 רמז")).clicked() {
                                app.request_hint();
                            }
                            if ui
                                .add_enabled(answered && !pending, Button::new("📘 הסבר תשובה"))
                                .clicked()
                            {
                                app.request_explain();
                            }
                            if ui.add_enabled(answered, Button::new("➡ הבא")).clicked() {
                                app.next_question();
                            }
                            if ui.button("↩ חזרה לנושאים").clicked() {
                                app.back_to_topics();
                            }
                        });

                        ui.add_space(10.0);

                        // Panel de pista/explicación
                        ui.group(|ui| {
                            ui.set_width(panel_width - 16.0);
                            ui.label(&app.ai_box);
                        });

                        ui.separator();

                        ui.label(RichText::new("💬 צ'אט").strong());
                        ui.add_space(6.0);

                        ScrollArea::vertical()
                            .id_salt("chat_log")
                            .max_height(160.0)
                            .auto_shrink([false, true])
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for bubble in &app.chat_log {
                                    let icon = if bubble.is_user() { "🧑" } else { "🤖" };
                                    ui.label(format!("{icon} {}", bubble.content));
                                    ui.add_space(2.0);
                                }
                            });

                        ui.add_space(6.0);
                        let mut send = false;
                        ui.horizontal(|ui| {
                            let edit = TextEdit::singleline(&mut app.chat_input)
                                .hint_text("שאל כאן...")
                                .desired_width(panel_width - 90.0);
                            let response = ui.add(edit);
                            if response.lost_focus()
                                && ui.input(|i| i.key_pressed(Key::Enter))
                            {
                                send = true;
                            }
                            if ui.add_enabled(!pending, Button::new("שלח")).clicked() {
                                send = true;
                            }
                        });
                        if send && !pending {
                            app.send_chat();
                        }
                    });
            });
        });
    });
}
