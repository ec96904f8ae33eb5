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
// A random password generator with strength rating.

//! Random password generation and heuristic strength rating.
//!
//! The core is two pure functions: [`passgen::generate`] draws a password
//! from the character classes enabled in a [`charset::GenerationConfig`],
//! and [`strength::score`] rates the result on a seven-condition tally.
//! Neither calls the other; the host (here, the CLI in `main.rs`) composes
//! them and owns everything around them: argument collection, display,
//! clipboard copy.

pub mod charset;
pub mod commands;
pub mod passgen;
pub mod setclip;
pub mod strength;
