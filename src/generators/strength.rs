// src/generators/strength.rs
use crate::models::StrengthResult;

use super::password::SYMBOLS;

// Analyze password strength
//
// Base score 1, one point each for length >= 10, an uppercase letter, a digit,
// a symbol and length >= 12. Memorable passwords lose a point.
pub fn evaluate(password: &str, easy_to_remember: bool) -> StrengthResult {
    let length = password.chars().count();
    let mut score: i32 = 1;

    if length >= 10 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.bytes().any(|b| SYMBOLS.contains(&b)) {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }

    if easy_to_remember {
        score -= 1;
    }

    let result = StrengthResult::from_raw(score);
    log::debug!("Raw strength {} rated {}", score, result.label);
    result
}
