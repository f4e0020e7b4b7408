// src/view_models.rs

use crate::scoring::BadgeTier;

/// Etiquetas de temas para la UI en hebreo; si no hay traducción se muestra
/// el nombre del catálogo tal cual.
pub fn label_topic(name: &str) -> &str {
    match name {
        "Python" => "פייתון",
        "JavaScript" => "JavaScript",
        "History" => "היסטוריה",
        "Sports" => "ספורט",
        "Geography" => "גאוגרפיה",
        other => other,
    }
}

/// Estado visual de un botón de respuesta una vez respondida la pregunta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    /// Pregunta sin responder: botón activo.
    Idle,
    /// La opción correcta (se marca siempre tras responder).
    Correct,
    /// La elegida por el usuario cuando no era la correcta.
    Wrong,
    /// El resto de opciones tras responder.
    Dimmed,
}

#[derive(Debug, Clone)]
pub struct AnswerChoice {
    pub text: String,
    pub state: ChoiceState,
}

/// Emoji y mensaje fijos por insignia (los textos son de presentación,
/// el motor solo decide el `BadgeTier`).
pub fn badge_emoji(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Low => "🐢",
        BadgeTier::Mid => "👍",
        BadgeTier::High => "🚀",
        BadgeTier::PerfectWithHelp => "⭐",
        BadgeTier::PerfectNoHelp => "👑",
    }
}

pub fn badge_message(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Low => "לאט לאט ככה מתחילים! 💪",
        BadgeTier::Mid => "לא רע בכלל! 👏",
        BadgeTier::High => "טוב! 🔥",
        BadgeTier::PerfectWithHelp => "מושלם! אבל השתמשת בעזרה 😉 עדיין תותח!",
        BadgeTier::PerfectNoHelp => "מושלם בלי עזרה! אלוף אמיתי! 👑",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_topics_fall_back_to_the_raw_name() {
        assert_eq!(label_topic("Python"), "פייתון");
        assert_eq!(label_topic("Chemistry"), "Chemistry");
    }
}
