//! The session state container.
//!
//! A `SessionStore` owns its verifier and storage backend; callers hold it by
//! value or reference and pass it to whatever renders the UI.

use shelf_core::entities::{AuthState, Session, User};

use crate::error::AuthError;
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use crate::verifier::CredentialVerifier;

/// What [`SessionStore::restore`] found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Both keys were present and valid.
    Restored,
    /// Neither key was present.
    Empty,
    /// Persisted data was partial or unreadable and has been cleared.
    Discarded { reason: String },
}

pub struct SessionStore<V, S> {
    verifier: V,
    storage: S,
    state: AuthState,
}

impl<V, S> SessionStore<V, S>
where
    V: CredentialVerifier,
    S: SessionStorage,
{
    /// Create a store in the `Restoring` state. Call [`Self::restore`] next.
    pub fn new(verifier: V, storage: S) -> Self {
        Self {
            verifier,
            storage,
            state: AuthState::Restoring,
        }
    }

    /// Load the persisted session, leaving the `Restoring` state.
    ///
    /// Partial or unparseable data is treated as "signed out": both keys are
    /// removed and the outcome says why.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if storage cannot be read or the corrupt
    /// keys cannot be removed. The store is unauthenticated either way.
    pub fn restore(&mut self) -> Result<RestoreOutcome, AuthError> {
        self.state = AuthState::Unauthenticated;

        let token = self.storage.get(TOKEN_KEY)?;
        let user = self.storage.get(USER_KEY)?;

        let reason = match (token, user) {
            (None, None) => return Ok(RestoreOutcome::Empty),
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "restored persisted session");
                    self.state = AuthState::Authenticated(Session { token, user });
                    return Ok(RestoreOutcome::Restored);
                }
                Err(error) => format!("failed to parse user data: {error}"),
            },
            (Some(_), None) => "token present without user data".to_string(),
            (None, Some(_)) => "user data present without token".to_string(),
        };

        tracing::warn!(%reason, "discarding persisted session");
        self.clear_persisted()?;
        Ok(RestoreOutcome::Discarded { reason })
    }

    /// Sign in and persist the session.
    ///
    /// On failure the current state is left as it was. If persisting fails,
    /// storage is rewritten to match that state; should that also fail, the
    /// store signs out so memory and storage agree.
    ///
    /// # Errors
    ///
    /// Returns the verifier's error, or `AuthError::Storage` if persisting fails.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let session = self.verifier.sign_in(email, password)?;
        tracing::info!(user_id = %session.user.id, "signed in");
        self.establish(session)
    }

    /// Register, then sign in as the new account.
    ///
    /// # Errors
    ///
    /// Returns the verifier's error, or `AuthError::Storage` if persisting fails.
    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<&Session, AuthError> {
        let session = self.verifier.sign_up(name, email, password)?;
        tracing::info!(user_id = %session.user.id, "signed up");
        self.establish(session)
    }

    /// Clear the in-memory session and both persisted keys.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the persisted keys cannot be removed;
    /// the in-memory session is cleared regardless.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        if let Some(session) = self.state.session() {
            tracing::info!(user_id = %session.user.id, "signed out");
        }
        self.state = AuthState::Unauthenticated;
        self.clear_persisted()
    }

    #[must_use]
    pub const fn current_session(&self) -> Option<&Session> {
        self.state.session()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    /// Require an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no session is active.
    pub fn require_session(&self) -> Result<&Session, AuthError> {
        self.state.session().ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, e.g. to simulate a reload.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn establish(&mut self, session: Session) -> Result<&Session, AuthError> {
        if let Err(error) = self.persist(&session) {
            self.resync_storage();
            return Err(error);
        }

        self.state = AuthState::Authenticated(session);
        self.require_session()
    }

    fn persist(&mut self, session: &Session) -> Result<(), AuthError> {
        let raw_user = serde_json::to_string(&session.user)
            .map_err(|e| AuthError::Other(format!("failed to serialize user: {e}")))?;

        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &raw_user)
    }

    /// After a failed write, put storage back in line with the in-memory
    /// state: re-persist the active session, or clear partial keys.
    fn resync_storage(&mut self) {
        if let Some(previous) = self.state.session().cloned() {
            match self.persist(&previous) {
                Ok(()) => return,
                Err(error) => {
                    tracing::warn!(%error, "failed to re-persist active session; signing out");
                    self.state = AuthState::Unauthenticated;
                }
            }
        }
        if let Err(cleanup) = self.clear_persisted() {
            tracing::warn!(%cleanup, "failed to clean up partial session write");
        }
    }

    fn clear_persisted(&mut self) -> Result<(), AuthError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}
