mod login;
mod logout;
mod signup;
mod status;

use serde::Serialize;
use shelf_core::entities::Session;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `shelf auth <subcommand>`.
pub fn handle(action: &AuthCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags),
        AuthCommands::Signup(args) => signup::handle(args, ctx, flags),
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

/// Title of the destructive notice shown when `action` fails.
#[must_use]
pub const fn failure_title(action: &AuthCommands) -> &'static str {
    match action {
        AuthCommands::Login(_) => "Login failed",
        AuthCommands::Signup(_) => "Signup failed",
        AuthCommands::Logout | AuthCommands::Status => "Error",
    }
}

#[derive(Serialize)]
struct SessionResponse {
    user_id: String,
    name: String,
    email: String,
    token: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user.id.clone(),
            name: session.user.name.clone(),
            email: session.user.email.clone(),
            token: session.token.clone(),
        }
    }
}
