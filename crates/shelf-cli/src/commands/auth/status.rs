use serde::Serialize;
use shelf_auth::RestoreOutcome;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    state: &'static str,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    restored_from: &'static str,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.session.state();
    let user = state.session().map(|session| &session.user);

    let (restored_from, note) = match &ctx.restore {
        RestoreOutcome::Restored => ("storage", None),
        RestoreOutcome::Empty => ("nothing", None),
        RestoreOutcome::Discarded { reason } => ("discarded", Some(reason.clone())),
    };

    let status = AuthStatusResponse {
        authenticated: state.is_authenticated(),
        state: state.as_str(),
        user_id: user.map(|u| u.id.clone()),
        name: user.map(|u| u.name.clone()),
        email: user.map(|u| u.email.clone()),
        restored_from,
        note,
    };

    output(&status, flags.format)
}
