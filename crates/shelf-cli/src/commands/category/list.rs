use super::for_display;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let fallback = &ctx.config.general.fallback_image_url;

    let categories = ctx
        .categories
        .search(search.unwrap_or_default())
        .into_iter()
        .take(usize::try_from(limit)?)
        .map(|category| for_display(category, fallback))
        .collect::<Vec<_>>();

    output(&categories, flags.format)
}
