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
// Password generator

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::charset::GenerationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassgenError {
    /// Every character class was disabled, leaving nothing to sample.
    /// Expected user input, not a fault; the host reports it and keeps going.
    #[error("at least one character class must be included")]
    EmptyCharset,
}

/// Generates one random password from `config`.
///
/// Each character is an independent draw from the operating system's
/// CSPRNG, uniform over the assembled charset (`choose` rejection-samples
/// the index, so no charset position is favored). Repeated characters are
/// allowed. Does not mutate the config and holds no state between calls.
pub fn generate(config: &GenerationConfig) -> Result<String, PassgenError> {
    let charset = config.charset();
    if charset.is_empty() {
        return Err(PassgenError::EmptyCharset);
    }
    debug!(
        "drawing {} characters from a charset of {}",
        config.length,
        charset.len()
    );

    let mut rng = OsRng;
    let mut password = String::with_capacity(config.length);
    for _ in 0..config.length {
        // charset is non-empty here, so choose always yields a character
        password.push(*charset.choose(&mut rng).unwrap());
    }
    Ok(password)
}
