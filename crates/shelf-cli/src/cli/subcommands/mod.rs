mod auth;
mod category;

pub use auth::{AuthCommands, AuthLoginArgs, AuthSignupArgs};
pub use category::CategoryCommands;
