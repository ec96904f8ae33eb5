use anyhow::Context;

use crate::charset::GenerationConfig;
use crate::{passgen, setclip, strength};

/// Collects CLI flags into a config, generates one password, scores it
/// and prints both. The negative flags mirror the generator defaults:
/// every class is on unless excluded.
pub fn generate_random(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    json: bool,
    copy: Option<u64>,
) -> anyhow::Result<()> {
    let config = GenerationConfig {
        length,
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_numbers: !no_numbers,
        include_symbols: !no_symbols,
    };
    let password = passgen::generate(&config).context("failed to generate password")?;
    let result = strength::score(&password, config.length);

    if json {
        let out = serde_json::json!({
            "password": password,
            "length": config.length,
            "level": result.level,
            "label": result.label,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Generated password: {}", password);
        println!("Strength: {} (level {}/4)", result.label, result.level);
    }

    if let Some(clear_after) = copy {
        setclip::copy_to_clipboard(&password, clear_after)
            .context("failed to copy password to clipboard")?;
        println!(
            "Password copied to clipboard, clearing in {} seconds",
            clear_after
        );
    }
    Ok(())
}
