use shelf_core::notice::Notice;

use super::SessionResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &AuthLoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.sign_in(&args.email, &args.password)?;
    let response = SessionResponse::from(session);
    emit(&Notice::login_successful(), flags);
    output(&response, flags.format)
}
