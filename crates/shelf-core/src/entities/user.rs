use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated user identity.
///
/// Persisted as JSON under the `user` storage key alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
