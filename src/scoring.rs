//! Cálculo puro de la puntuación final y la insignia.

use crate::model::Mistake;

/// Insignia del final de partida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    Low,
    Mid,
    High,
    PerfectWithHelp,
    PerfectNoHelp,
}

/// Resumen final de la partida; se calcula una sola vez al terminar.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub correct: usize,
    pub used_help: bool,
    pub tier: BadgeTier,
    pub mistakes: Vec<Mistake>,
}

type Rule = (fn(usize, usize, bool) -> bool, BadgeTier);

/// Insignia en función de (total, fallos, ayuda usada).
///
/// Las reglas se evalúan en orden y gana la primera que aplica. El orden no es
/// decorativo: "un solo fallo" va después de la franja 6..=8 y antes de las
/// perfectas, así que con total=10 un 9/10 siempre sale High aunque 9 también
/// quede por encima de la franja media.
pub fn badge_tier(total: usize, mistake_count: usize, used_help: bool) -> BadgeTier {
    let correct = total.saturating_sub(mistake_count);

    let rules: [Rule; 5] = [
        (|correct, _, _| correct < 6, BadgeTier::Low),
        (|correct, _, _| (6..=8).contains(&correct), BadgeTier::Mid),
        (|correct, total, _| correct + 1 == total, BadgeTier::High),
        (
            |correct, total, help| correct == total && help,
            BadgeTier::PerfectWithHelp,
        ),
        (
            |correct, total, help| correct == total && !help,
            BadgeTier::PerfectNoHelp,
        ),
    ];

    for (applies, tier) in rules {
        if applies(correct, total, used_help) {
            return tier;
        }
    }

    // Rama residual (p. ej. 9..11 aciertos en partidas de más de 10).
    BadgeTier::Mid
}

pub fn score(total: usize, mistakes: Vec<Mistake>, used_help: bool) -> Summary {
    let correct = total.saturating_sub(mistakes.len());
    Summary {
        total,
        correct,
        used_help,
        tier: badge_tier(total, mistakes.len(), used_help),
        mistakes,
    }
}
