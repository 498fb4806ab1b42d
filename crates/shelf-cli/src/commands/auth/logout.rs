use serde::Serialize;
use shelf_core::notice::Notice;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.sign_out()?;
    emit(&Notice::logged_out(), flags);
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
