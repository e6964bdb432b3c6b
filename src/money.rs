use rust_decimal::{Decimal, RoundingStrategy};

use crate::quickcheck::Capacity;

/// Platzhalter für nicht-numerische Eingaben an der Darstellungsgrenze.
pub const NOT_AVAILABLE: &str = "n. v.";

/// Rundet kaufmännisch auf ganze Franken (0.5 rundet vom Nullpunkt weg).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formatiert einen Betrag ohne Nachkommastellen mit Schweizer
/// Tausendertrennzeichen (1'234'567).
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Wie [`format_amount`]; `None` wird als Platzhalter dargestellt statt zu scheitern.
pub fn format_amount_opt(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format_amount(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formatiert eine Kapazität; das Unbegrenzt-Sentinel erhält das übergebene Label.
pub fn format_capacity(value: &Capacity, unbounded_label: &str) -> String {
    match value {
        Capacity::Bounded(v) => format_amount(*v),
        Capacity::Unbounded => unbounded_label.to_string(),
    }
}

/// Liest einen Betrag aus Benutzereingabe; toleriert Tausendertrennzeichen
/// und Leerraum. Nicht-numerischer Text ergibt `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '\'' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(c);
    }
    grouped.iter().rev().collect()
}
