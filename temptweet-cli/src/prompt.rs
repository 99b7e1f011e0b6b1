use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode, Text};

pub fn username() -> Result<String> {
    Text::new("Twitter username:").prompt().context("Failed to read username")
}

/// Masked; the password is never echoed.
pub fn password() -> Result<String> {
    Password::new("Twitter password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read password")
}

pub fn station(current: &str) -> Result<String> {
    Text::new("Weather station:")
        .with_default(current)
        .prompt()
        .context("Failed to read weather station")
}

/// Username to remember; blank input forgets it.
pub fn default_username(current: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new("Default Twitter username (blank for none):");
    if let Some(current) = current {
        prompt = prompt.with_initial_value(current);
    }
    let answer = prompt.prompt().context("Failed to read username")?;
    Ok(crate::cli::non_blank(Some(answer)))
}
