use serde::Serialize;
use shelf_core::notice::Notice;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.categories.delete(id);
    if deleted {
        emit(&Notice::category_deleted(), flags);
    } else {
        tracing::debug!(%id, "delete of unknown category ignored");
    }
    output(&DeleteResponse { id, deleted }, flags.format)
}
