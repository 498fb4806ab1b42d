use shelf_core::notice::Notice;
use shelf_store::form::CategoryForm;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub name: String,
    pub items: String,
    pub image: Option<String>,
}

pub fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = CategoryForm {
        name: params.name,
        item_count: params.items,
        image_url: params.image.unwrap_or_default(),
    };

    let created = ctx.categories.add(form.into_new()?)?;
    emit(&Notice::category_added(&created.name), flags);
    output(&created, flags.format)
}
