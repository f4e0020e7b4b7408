//! Pedidos de asistencia desde la UI: un hilo por pedido, resultado por canal
//! y chequeo de generación/época al recibirlo (patrón del juez remoto).

use super::*;

impl TriviaApp {
    pub fn assist_pending(&self) -> bool {
        self.pending_assist.is_some()
    }

    pub fn request_hint(&mut self) {
        let Some(q) = self.current_question_cloned() else {
            return;
        };
        self.ai_box = "טוען רמז...".into();
        self.spawn_assist(AssistKind::Hint, move |client| client.hint(&q));
    }

    /// "Explicar" exige respuesta previa: el guard es local y no toca la red.
    pub fn request_explain(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(q) = session.current_question().cloned() else {
            return;
        };

        match session.require_answered() {
            Ok(choice) => {
                self.ai_box = "טוען הסבר...".into();
                self.spawn_assist(AssistKind::Explain, move |client| client.explain(&q, choice));
            }
            Err(_) => {
                self.ai_box = "ענה קודם ואז אוכל להסביר.".into();
            }
        }
    }

    pub fn send_chat(&mut self) {
        let message = self.chat_input.trim().to_string();
        if message.is_empty() {
            return;
        }
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(q) = session.current_question().cloned() else {
            return;
        };
        let history = session.chat_history().to_vec();

        self.chat_input.clear();
        self.chat_log.push(ChatMessage::user(message.clone()));
        self.spawn_assist(AssistKind::Chat, move |client| {
            client.chat(&q, &message, &history)
        });
    }

    fn spawn_assist(
        &mut self,
        kind: AssistKind,
        job: impl FnOnce(&AssistClient) -> AssistOutcome + Send + 'static,
    ) {
        if self.pending_assist.is_some() {
            // Un solo pedido en vuelo por pregunta; la UI ya lo deshabilita.
            return;
        }

        let (tx, rx) = mpsc::channel();
        let generation = self.generation;
        let epoch = self.question_epoch;
        let client = self.assist_client.clone();

        self.pending_assist = Some(PendingAssist { kind });
        self.assist_rx = Some(rx);

        std::thread::spawn(move || {
            let outcome = job(&client);
            // Si la UI descartó el canal, el send falla y no pasa nada.
            let _ = tx.send((generation, epoch, kind, outcome));
        });
    }

    /// Se llama en cada frame; drena el canal si hay resultado.
    pub fn poll_assist(&mut self) {
        let Some(delivery) = self.assist_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        let (generation, epoch, kind, outcome) = delivery;
        self.pending_assist = None;
        self.assist_rx = None;
        self.handle_assist_result(generation, epoch, kind, outcome);
    }

    pub(crate) fn drop_pending_assist(&mut self) {
        self.pending_assist = None;
        self.assist_rx = None;
    }

    pub(crate) fn handle_assist_result(
        &mut self,
        generation: u64,
        epoch: u64,
        kind: AssistKind,
        outcome: AssistOutcome,
    ) {
        if generation != self.generation {
            // Llegó de una sesión ya reemplazada: no se toca nada.
            return;
        }

        // Contestar o chocar con el cupo cuenta como ayuda para toda la partida.
        if matches!(
            outcome,
            AssistOutcome::Answered { .. } | AssistOutcome::LimitReached { .. }
        ) {
            if let Some(session) = self.session.as_mut() {
                session.mark_help_used();
            }
        }

        if epoch != self.question_epoch {
            // Resultado tardío de una pregunta anterior: la marca de ayuda
            // queda, el panel de la pregunta actual no se pisa.
            return;
        }

        self.apply_assist(kind, outcome);
    }

    fn apply_assist(&mut self, kind: AssistKind, outcome: AssistOutcome) {
        match kind {
            AssistKind::Hint | AssistKind::Explain => match outcome {
                AssistOutcome::Answered {
                    text,
                    usage_count,
                    max_usage,
                    ..
                } => {
                    self.ai_box = text;
                    if let (Some(count), Some(max)) = (usage_count, max_usage) {
                        let noun = if kind == AssistKind::Hint {
                            "רמז"
                        } else {
                            "הסבר"
                        };
                        self.ai_box.push_str(&format!("\n\n({noun} {count}/{max})"));
                    }
                }
                AssistOutcome::LimitReached { text } => self.ai_box = text,
                AssistOutcome::Failed { reason } => {
                    self.ai_box = format!("נכשל: {reason}");
                }
            },
            AssistKind::Chat => match outcome {
                AssistOutcome::Answered {
                    text,
                    history,
                    usage_count,
                    max_usage,
                } => {
                    if let (Some(session), Some(history)) = (self.session.as_mut(), history) {
                        session.replace_chat_history(history);
                    }
                    let mut line = text;
                    if let (Some(count), Some(max)) = (usage_count, max_usage) {
                        line.push_str(&format!("\n\n💬 הודעה {count}/{max}"));
                    }
                    self.chat_log.push(ChatMessage::assistant(line));
                }
                AssistOutcome::LimitReached { text } => {
                    self.chat_log.push(ChatMessage::assistant(text));
                }
                AssistOutcome::Failed { reason } => {
                    self.chat_log
                        .push(ChatMessage::assistant(format!("נכשל: {reason}")));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Topics;
    use crate::model::Question;

    fn app_with_topic() -> TriviaApp {
        let mut topics = Topics::new();
        topics.insert(
            "Python".into(),
            vec![
                Question {
                    question: "q1".into(),
                    choices: vec!["a".into(), "b".into()],
                    correct_index: 0,
                },
                Question {
                    question: "q2".into(),
                    choices: vec!["a".into(), "b".into()],
                    correct_index: 1,
                },
            ],
        );
        let mut app = TriviaApp::with_topics(topics, false, AssistClient::new("http://127.0.0.1:1".into()));
        app.start_game();
        app
    }

    fn answered(text: &str) -> AssistOutcome {
        AssistOutcome::Answered {
            text: text.into(),
            history: None,
            usage_count: None,
            max_usage: None,
        }
    }

    #[test]
    fn answered_outcome_marks_help_and_fills_the_panel() {
        let mut app = app_with_topic();
        app.handle_assist_result(app.generation, app.question_epoch, AssistKind::Hint, answered("רמז טוב"));
        assert_eq!(app.ai_box, "רמז טוב");
        assert!(app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn limit_reached_still_counts_as_help() {
        let mut app = app_with_topic();
        app.handle_assist_result(
            app.generation,
            app.question_epoch,
            AssistKind::Hint,
            AssistOutcome::LimitReached {
                text: "נגמרו הרמזים".into(),
            },
        );
        assert_eq!(app.ai_box, "נגמרו הרמזים");
        assert!(app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn failed_outcome_does_not_mark_help() {
        let mut app = app_with_topic();
        app.handle_assist_result(
            app.generation,
            app.question_epoch,
            AssistKind::Explain,
            AssistOutcome::Failed {
                reason: "timeout".into(),
            },
        );
        assert!(app.ai_box.starts_with("נכשל"));
        assert!(!app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn stale_generation_is_discarded_entirely() {
        let mut app = app_with_topic();
        let old_generation = app.generation;
        app.back_to_topics();
        app.start_game(); // sesión nueva, generación nueva

        app.handle_assist_result(old_generation, 0, AssistKind::Hint, answered("viejo"));
        assert_eq!(app.ai_box, AI_BOX_IDLE);
        assert!(!app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn late_result_from_a_previous_question_only_latches_help() {
        let mut app = app_with_topic();
        let old_epoch = app.question_epoch;
        app.answer(0);
        app.next_question();

        app.handle_assist_result(app.generation, old_epoch, AssistKind::Hint, answered("tarde"));
        assert_eq!(app.ai_box, AI_BOX_IDLE, "el panel de la pregunta nueva no se pisa");
        assert!(app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn chat_answer_replaces_the_session_history() {
        let mut app = app_with_topic();
        let history = vec![
            ChatMessage::user("שאלה"),
            ChatMessage::assistant("תשובה"),
        ];
        app.handle_assist_result(
            app.generation,
            app.question_epoch,
            AssistKind::Chat,
            AssistOutcome::Answered {
                text: "תשובה".into(),
                history: Some(history.clone()),
                usage_count: Some(1),
                max_usage: Some(2),
            },
        );
        assert_eq!(app.session.as_ref().unwrap().chat_history(), &history[..]);
        let last = app.chat_log.last().unwrap();
        assert!(last.content.contains("הודעה 1/2"));
    }

    #[test]
    fn explain_without_answer_never_spawns_a_request() {
        let mut app = app_with_topic();
        app.request_explain();
        assert!(!app.assist_pending());
        assert_eq!(app.ai_box, "ענה קודם ואז אוכל להסביר.");
        assert!(!app.session.as_ref().unwrap().used_help());
    }

    #[test]
    fn advancing_resets_panel_and_chat_log() {
        let mut app = app_with_topic();
        app.ai_box = "רמז".into();
        app.chat_log.push(ChatMessage::user("hola"));
        app.answer(0);
        app.next_question();
        assert_eq!(app.ai_box, AI_BOX_IDLE);
        assert_eq!(app.chat_log.len(), 1);
        assert_eq!(app.chat_log[0].content, CHAT_WELCOME);
    }

    #[test]
    fn finishing_the_pool_produces_a_summary() {
        let mut app = app_with_topic();
        for _ in 0..2 {
            app.answer(0);
            app.next_question();
        }
        assert_eq!(app.state, AppState::Summary);
        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.correct + summary.mistakes.len(), 2);
    }

    #[test]
    fn no_questions_for_topic_keeps_the_select_screen() {
        let mut topics = Topics::new();
        topics.insert("Sports".into(), Vec::new());
        let mut app =
            TriviaApp::with_topics(topics, false, AssistClient::new("http://127.0.0.1:1".into()));
        app.start_game();
        assert_eq!(app.state, AppState::TopicSelect);
        assert_eq!(app.message, "אין שאלות לנושא הזה");
        assert!(app.session.is_none());
    }
}
