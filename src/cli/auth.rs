//! Sign-in CLI commands
//!
//! Configures the account the TUI login screen accepts. Without one, any
//! plausible email and non-empty password signs in.

use std::io::BufRead;

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::config::{paths::BudgetProPaths, settings::Settings};
use crate::error::{BudgetProError, BudgetProResult, ValidationError};
use crate::services::auth::hash_password;
use crate::services::authenticator_from_settings;

/// Sign-in management commands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Require a specific email and password at login
    SetPassword {
        /// Email address to sign in with
        #[arg(short, long)]
        email: String,

        /// Read the password from the first line of stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,
    },

    /// Show which sign-in mode is active
    Status,

    /// Remove the configured account and return to demo sign-in
    Clear,
}

/// Handle sign-in commands
pub fn handle_auth_command(
    paths: &BudgetProPaths,
    settings: &mut Settings,
    cmd: AuthCommands,
) -> BudgetProResult<()> {
    match cmd {
        AuthCommands::SetPassword {
            email,
            password_stdin,
        } => {
            let password = if password_stdin {
                read_password_line(std::io::stdin().lock())?
            } else {
                prompt_new_password()?
            };
            set_password(paths, settings, &email, &password)?;
            println!("Login for {} updated.", settings.auth.email.as_deref().unwrap_or_default());
            Ok(())
        }
        AuthCommands::Status => show_status(settings),
        AuthCommands::Clear => {
            if !settings.auth.is_configured() {
                println!("No login is configured.");
                return Ok(());
            }
            settings.auth.email = None;
            settings.auth.password_hash = None;
            settings.save(paths)?;
            println!("Login cleared. Any email and password will be accepted.");
            Ok(())
        }
    }
}

/// Hash and store the login for `email`
pub fn set_password(
    paths: &BudgetProPaths,
    settings: &mut Settings,
    email: &str,
    password: &str,
) -> BudgetProResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("Email").into());
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("Password").into());
    }

    settings.auth.email = Some(email.to_string());
    settings.auth.password_hash = Some(hash_password(password)?);
    settings.save(paths)
}

fn show_status(settings: &Settings) -> BudgetProResult<()> {
    println!("Login Status");
    println!("============");
    println!();

    let authenticator = authenticator_from_settings(&settings.auth)?;
    println!("Mode: {}", authenticator.describe());
    if let Some(ref email) = settings.auth.email {
        println!("Email: {}", email);
    } else {
        println!();
        println!("Run 'budgetpro auth set-password --email <EMAIL>' to require a password.");
    }

    Ok(())
}

/// Read one line, without its line ending
fn read_password_line(mut reader: impl BufRead) -> BudgetProResult<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> BudgetProResult<Zeroizing<String>> {
    let first = prompt_password("New password: ")?;
    if first.is_empty() {
        return Err(ValidationError::MissingField("Password").into());
    }

    let second = prompt_password("Confirm password: ")?;
    if *first != *second {
        return Err(ValidationError::PasswordMismatch.into());
    }

    Ok(first)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> BudgetProResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| BudgetProError::Auth(format!("Failed to read password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::verify_password;
    use tempfile::TempDir;

    #[test]
    fn test_set_password_saves_hash() {
        let temp = TempDir::new().unwrap();
        let paths = BudgetProPaths::with_base_dir(temp.path().to_path_buf());
        let mut settings = Settings::default();

        set_password(&paths, &mut settings, " ana@example.com ", "s3cret").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.auth.email.as_deref(), Some("ana@example.com"));
        let hash = loaded.auth.password_hash.unwrap();
        assert!(verify_password("s3cret", &hash));
    }

    #[test]
    fn test_set_password_rejects_empty() {
        let temp = TempDir::new().unwrap();
        let paths = BudgetProPaths::with_base_dir(temp.path().to_path_buf());
        let mut settings = Settings::default();

        let err = set_password(&paths, &mut settings, "ana@example.com", "").unwrap_err();
        assert!(err.is_validation());
        let err = set_password(&paths, &mut settings, "  ", "pw").unwrap_err();
        assert!(err.is_validation());
        assert!(!settings.auth.is_configured());
    }

    #[test]
    fn test_read_password_line() {
        let input = b"hunter2\r\nignored\n";
        let password = read_password_line(&input[..]).unwrap();
        assert_eq!(password.as_str(), "hunter2");
    }
}
