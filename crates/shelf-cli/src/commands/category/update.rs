use shelf_core::notice::Notice;
use shelf_store::form::parse_item_count;
use shelf_store::updates::category::CategoryUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub items: Option<String>,
    pub image: Option<String>,
}

pub fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = CategoryUpdateBuilder::new();
    if let Some(name) = params.name {
        builder = builder.name(name);
    }
    if let Some(items) = params.items.as_deref() {
        builder = builder.item_count(parse_item_count(items)?);
    }
    if let Some(image) = params.image {
        builder = builder.image(image);
    }

    let category = ctx.categories.update(&params.id, builder.build())?;
    emit(&Notice::category_updated(), flags);
    output(&category, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none() && params.items.is_none() && params.image.is_none() {
        anyhow::bail!("At least one of --name, --items, or --image must be provided");
    }
    Ok(())
}
