//! Sign-in capability
//!
//! The navigator only sees whether a login succeeded. Deciding that is the
//! job of an `Authenticator`, chosen from the user's settings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use zeroize::Zeroizing;

use crate::config::settings::AuthSettings;
use crate::error::{BudgetProError, BudgetProResult};

/// Email and password entered on the login screen
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Decides whether a set of credentials may sign in
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool;

    /// Short description for status output
    fn describe(&self) -> &'static str;
}

/// Accepts any plausible email with a non-empty password
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        let email = credentials.email.as_str();
        let plausible = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && !domain.is_empty())
            .unwrap_or(false);
        plausible && !credentials.password.is_empty()
    }

    fn describe(&self) -> &'static str {
        "demo (any email and password)"
    }
}

/// Checks a single configured account against an Argon2 password hash
#[derive(Debug, Clone)]
pub struct PasswordHashAuthenticator {
    email: String,
    password_hash: String,
}

impl PasswordHashAuthenticator {
    /// Create an authenticator, rejecting malformed hashes up front
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> BudgetProResult<Self> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash)
            .map_err(|e| BudgetProError::Auth(format!("Invalid password hash: {}", e)))?;

        Ok(Self {
            email: email.into(),
            password_hash,
        })
    }
}

impl Authenticator for PasswordHashAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        if !credentials.email.eq_ignore_ascii_case(&self.email) {
            return false;
        }
        verify_password(&credentials.password, &self.password_hash)
    }

    fn describe(&self) -> &'static str {
        "password"
    }
}

/// Hash a password into a PHC string suitable for the settings file
pub fn hash_password(password: &str) -> BudgetProResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| BudgetProError::Auth(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Pick the authenticator described by the settings
pub fn authenticator_from_settings(auth: &AuthSettings) -> BudgetProResult<Box<dyn Authenticator>> {
    match (&auth.email, &auth.password_hash) {
        (Some(email), Some(hash)) => Ok(Box::new(PasswordHashAuthenticator::new(
            email.clone(),
            hash.clone(),
        )?)),
        _ => Ok(Box::new(DemoAuthenticator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_authenticator() {
        let auth = DemoAuthenticator;
        assert!(auth.authenticate(&Credentials::new("ana@example.com", "pw")));
        assert!(!auth.authenticate(&Credentials::new("ana@example.com", "")));
        assert!(!auth.authenticate(&Credentials::new("ana", "pw")));
        assert!(!auth.authenticate(&Credentials::new("@example.com", "pw")));
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-hash"));
    }

    #[test]
    fn test_password_hash_authenticator() {
        let hash = hash_password("s3cret").unwrap();
        let auth = PasswordHashAuthenticator::new("ana@example.com", hash).unwrap();

        assert!(auth.authenticate(&Credentials::new("ana@example.com", "s3cret")));
        assert!(auth.authenticate(&Credentials::new(" ANA@example.com ", "s3cret")));
        assert!(!auth.authenticate(&Credentials::new("bob@example.com", "s3cret")));
        assert!(!auth.authenticate(&Credentials::new("ana@example.com", "wrong")));
    }

    #[test]
    fn test_rejects_malformed_hash() {
        let err = PasswordHashAuthenticator::new("ana@example.com", "plaintext").unwrap_err();
        assert!(matches!(err, BudgetProError::Auth(_)));
    }

    #[test]
    fn test_from_settings() {
        let demo = authenticator_from_settings(&AuthSettings::default()).unwrap();
        assert_eq!(demo.describe(), "demo (any email and password)");

        let settings = AuthSettings {
            email: Some("ana@example.com".into()),
            password_hash: Some(hash_password("pw").unwrap()),
        };
        let auth = authenticator_from_settings(&settings).unwrap();
        assert_eq!(auth.describe(), "password");
        assert!(auth.authenticate(&Credentials::new("ana@example.com", "pw")));
    }
}
