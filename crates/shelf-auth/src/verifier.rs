//! Credential verification.
//!
//! [`CredentialVerifier`] is the seam between the session store and whatever
//! decides who may sign in. [`DemoVerifier`] accepts a single configured
//! account and fabricates sign-ups locally.

use chrono::Utc;
use shelf_config::AuthConfig;
use shelf_core::entities::{Session, User};
use shelf_core::ids::{PREFIX_USER, format_id, stable_suffix};

use crate::error::AuthError;

/// Issues sessions for sign-in and sign-up attempts.
pub trait CredentialVerifier {
    /// Check an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the pair is not accepted.
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IncompleteSignup` when a field is blank.
    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session, AuthError>;
}

/// Single hard-coded account. Sign-ups are accepted for any complete input.
#[derive(Debug, Clone)]
pub struct DemoVerifier {
    email: String,
    password: String,
    user_id: String,
    user_name: String,
    token: String,
}

impl DemoVerifier {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            email: config.demo_email.clone(),
            password: config.demo_password.clone(),
            user_id: config.demo_user_id.clone(),
            user_name: config.demo_user_name.clone(),
            token: config.demo_token.clone(),
        }
    }

    fn demo_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            name: self.user_name.clone(),
            email: self.email.clone(),
        }
    }
}

impl Default for DemoVerifier {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl CredentialVerifier for DemoVerifier {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email == self.email && password == self.password {
            return Ok(Session {
                token: self.token.clone(),
                user: self.demo_user(),
            });
        }
        Err(AuthError::InvalidCredentials)
    }

    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session, AuthError> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() || password.trim().is_empty() {
            return Err(AuthError::IncompleteSignup);
        }

        let user = User {
            id: format_id(PREFIX_USER, &stable_suffix(email).to_string()),
            name: name.to_string(),
            email: email.to_string(),
        };
        let token = format!("{}-{}", self.token, Utc::now().timestamp_millis());
        Ok(Session { token, user })
    }
}
