use crate::strength;

/// Rates a password supplied on the command line. The scored length is
/// the password's own character count, since there is no generation
/// config to take it from.
pub fn test_password(password: &str, json: bool) -> anyhow::Result<()> {
    let result = strength::score(password, password.chars().count());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.level == 0 {
        println!("No strength rating for an empty password");
    } else {
        println!("Strength: {} (level {}/4)", result.label, result.level);
    }
    Ok(())
}
