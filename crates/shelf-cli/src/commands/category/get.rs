use super::for_display;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = ctx.categories.get(id)?;
    output(
        &for_display(category, &ctx.config.general.fallback_image_url),
        flags.format,
    )
}
