use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;

/// An authenticated identity and the token issued for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Authentication state of a client.
///
/// ```text
/// restoring → unauthenticated ⇄ authenticated
///           → authenticated
/// ```
///
/// `Restoring` is entered once at startup and left as soon as persisted
/// storage has been read, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Restoring,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Restoring | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restoring => "restoring",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".into(),
            user: User {
                id: "user-1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
        }
    }

    #[test]
    fn default_state_is_restoring() {
        let state = AuthState::default();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
    }

    #[test]
    fn authenticated_exposes_session() {
        let state = AuthState::Authenticated(session());
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.session().map(|s| s.user.id.as_str()), Some("user-1"));
        assert_eq!(state.as_str(), "authenticated");
    }
}
