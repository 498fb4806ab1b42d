use shelf_core::notice::Notice;

use super::SessionResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignupArgs;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &AuthSignupArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.sign_up(&args.name, &args.email, &args.password)?;
    let response = SessionResponse::from(session);
    emit(&Notice::account_created(), flags);
    output(&response, flags.format)
}
