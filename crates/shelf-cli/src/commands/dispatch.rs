use shelf_core::notice::Notice;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => {
            commands::auth::handle(&action, ctx, flags).inspect_err(|error| {
                emit(
                    &Notice::failure(commands::auth::failure_title(&action), error),
                    flags,
                );
            })
        }
        Commands::Category { action } => commands::category::handle(&action, ctx, flags),
        Commands::Route(args) => commands::route::handle(&args, ctx, flags),
        Commands::Shell => commands::shell::run(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
