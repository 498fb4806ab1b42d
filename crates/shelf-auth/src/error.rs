use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `shelf auth login`")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Please fill all required fields")]
    IncompleteSignup,

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Other(String),
}
