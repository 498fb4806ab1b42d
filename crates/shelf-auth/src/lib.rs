//! # shelf-auth
//!
//! Mock authentication for the Shelf admin dashboard.
//!
//! Provides the [`SessionStore`] state container, the [`CredentialVerifier`]
//! seam (with the single-account [`DemoVerifier`]), and the client-local
//! [`SessionStorage`] backends that persist the token/user pair.

pub mod error;
pub mod session_store;
pub mod storage;
pub mod verifier;

pub use error::AuthError;
pub use session_store::{RestoreOutcome, SessionStore};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use verifier::{CredentialVerifier, DemoVerifier};
