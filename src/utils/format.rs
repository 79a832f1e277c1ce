// src/utils/format.rs
use console::{style, Color};

use crate::models::{StrengthLabel, StrengthResult};

const FILLED_BAR: char = '█';
const EMPTY_BAR: char = '░';

pub fn label_color(label: StrengthLabel) -> Color {
    match label {
        StrengthLabel::Weak => Color::Red,
        StrengthLabel::Fair => Color::Yellow,
        StrengthLabel::Good => Color::Blue,
        StrengthLabel::Strong => Color::Green,
    }
}

// Four bars, the first `score` of them filled
pub fn strength_bars(result: &StrengthResult) -> String {
    (1..=StrengthResult::MAX_SCORE)
        .map(|bar| if bar <= result.score { FILLED_BAR } else { EMPTY_BAR })
        .collect()
}

/// Label plus bar meter, e.g. `GOOD ███░`. Colors are applied only when the
/// terminal supports them.
pub fn format_strength_meter(result: &StrengthResult) -> String {
    let color = label_color(result.label);
    format!(
        "{} {}",
        style(result.label.to_string()).fg(color).bold(),
        style(strength_bars(result)).fg(color)
    )
}

// Mask all but the first and last character of a password
pub fn mask_password(password: &str) -> String {
    let count = password.chars().count();
    if count <= 2 {
        return "*".repeat(count);
    }
    let mut chars = password.chars();
    let first = chars.next().unwrap_or('*');
    let last = chars.next_back().unwrap_or('*');
    format!("{}{}{}", first, "*".repeat(count - 2), last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_follow_score() {
        assert_eq!(strength_bars(&StrengthResult::from_raw(1)), "█░░░");
        assert_eq!(strength_bars(&StrengthResult::from_raw(3)), "███░");
        assert_eq!(strength_bars(&StrengthResult::from_raw(4)), "████");
    }

    #[test]
    fn meter_contains_label_and_bars() {
        let meter = console::strip_ansi_codes(&format_strength_meter(&StrengthResult::from_raw(2)))
            .to_string();
        assert_eq!(meter, "FAIR ██░░");
    }

    #[test]
    fn colors_follow_label() {
        assert_eq!(label_color(StrengthLabel::Weak), Color::Red);
        assert_eq!(label_color(StrengthLabel::Strong), Color::Green);
    }

    #[test]
    fn masks_middle_characters() {
        assert_eq!(mask_password("secret"), "s****t");
        assert_eq!(mask_password("ab"), "**");
        assert_eq!(mask_password(""), "");
    }
}
