//  ____                               _  _    _
// |  _ \   __ _  ___  ___  _ __ ___  (_)| |_ | |__
// | |_) | / _` |/ __|/ __|| '_ ` _ \ | || __|| '_ \
// |  __/ | (_| |\__ \\__ \| | | | | || || |_ | | | |
// |_|     \__,_||___/|___/|_| |_| |_||_| \__||_| |_|
//
// Date : 2026-08-21
// Version : 0.1.0
// License : MIT
//
// Strength scorer

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative strength classification. `None` is reserved for empty or
/// degenerate input and means "no rating at all", which the host displays
/// differently from `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    None,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLabel::None => "none",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// 0 (no rating) through 4 (very strong).
    pub level: u8,
    pub label: StrengthLabel,
}

/// Rates a password on a seven-condition tally: one point each for
/// length >= 12, >= 16 and >= 20, and for the presence of a lowercase
/// letter, an uppercase letter, a digit and a non-alphanumeric character.
///
/// `length` is the length the password was generated with, passed
/// separately so the host can score against the configured length rather
/// than re-deriving it. Deterministic and side-effect free.
pub fn score(password: &str, length: usize) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            level: 0,
            label: StrengthLabel::None,
        };
    }

    let mut tally = 0u8;
    if length >= 12 {
        tally += 1;
    }
    if length >= 16 {
        tally += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        tally += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        tally += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        tally += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        tally += 1;
    }
    if length >= 20 {
        tally += 1;
    }

    // Exact boundaries: 0-2 weak, 3-4 medium, 5 strong, 6-7 very strong.
    let (level, label) = match tally {
        0..=2 => (1, StrengthLabel::Weak),
        3..=4 => (2, StrengthLabel::Medium),
        5 => (3, StrengthLabel::Strong),
        _ => (4, StrengthLabel::VeryStrong),
    };
    StrengthResult { level, label }
}
