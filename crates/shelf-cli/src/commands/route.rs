use serde::Serialize;
use shelf_core::route::{Route, RouteDecision, guard};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RouteResponse {
    path: String,
    auth: &'static str,
    decision: RouteDecision,
}

/// Handle `shelf route <path>`.
pub fn handle(args: &RouteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path);
    let state = ctx.session.state();
    let response = RouteResponse {
        path: route.path().to_string(),
        auth: state.as_str(),
        decision: guard(&route, state),
    };
    output(&response, flags.format)
}
