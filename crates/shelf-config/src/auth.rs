//! Demo credential configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_email() -> String {
    "demo@example.com".into()
}

fn default_password() -> String {
    "password".into()
}

fn default_user_id() -> String {
    "user-123".into()
}

fn default_user_name() -> String {
    "Demo User".into()
}

fn default_token() -> String {
    "mock-jwt-token".into()
}

/// The single credential pair accepted by the demo verifier, and the identity
/// it signs in as.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_email")]
    pub demo_email: String,

    #[serde(default = "default_password")]
    pub demo_password: String,

    #[serde(default = "default_user_id")]
    pub demo_user_id: String,

    #[serde(default = "default_user_name")]
    pub demo_user_name: String,

    /// Token stored on successful demo sign-in.
    #[serde(default = "default_token")]
    pub demo_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: default_email(),
            demo_password: default_password(),
            demo_user_id: default_user_id(),
            demo_user_name: default_user_name(),
            demo_token: default_token(),
        }
    }
}

impl AuthConfig {
    /// Reject configurations the demo verifier could never match.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("auth.demo_email", &self.demo_email),
            ("auth.demo_password", &self.demo_password),
            ("auth.demo_user_id", &self.demo_user_id),
            ("auth.demo_token", &self.demo_token),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}
