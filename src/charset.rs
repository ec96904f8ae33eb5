//  ____                               _  _    _
// |  _ \   __ _  ___  ___  _ __ ___  (_)| |_ | |__
// | |_) | / _` |/ __|/ __|| '_ ` _ \ | || __|| '_ \
// |  __/ | (_| |\__ \\__ \| | | | | || || |_ | | | |
// |_|     \__,_||___/|___/|_| |_| |_||_| \__||_| |_|
//
// Date : 2026-08-20
// Version : 0.1.0
// License : MIT
//
// Character classes and charset assembly

use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits.
pub const NUMBERS: &str = "0123456789";
/// ASCII symbols eligible for passwords.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password length the CLI accepts.
pub const MIN_LENGTH: usize = 4;
/// Longest password length the CLI accepts.
pub const MAX_LENGTH: usize = 64;

/// Which character classes to sample from, and how many characters to
/// draw. The length bounds above are enforced by the CLI, not here; the
/// generator accepts any length (zero draws is a valid, empty password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Builds the sampling pool by concatenating the enabled alphabets in
    /// canonical order: uppercase, lowercase, numbers, symbols. Empty when
    /// every class is disabled.
    pub fn charset(&self) -> Vec<char> {
        let mut pool = String::new();
        if self.include_uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.include_lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.include_numbers {
            pool.push_str(NUMBERS);
        }
        if self.include_symbols {
            pool.push_str(SYMBOLS);
        }
        pool.chars().collect()
    }
}
