mod add;
mod delete;
mod get;
mod list;
mod update;

use shelf_core::entities::Category;
use shelf_core::image::resolve_image_path;
use shelf_core::route::Route;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;

/// Handle `shelf category <subcommand>`. Every category command is a
/// dashboard route and needs a session.
pub fn handle(
    action: &CategoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_route(&Route::Categories)?;

    match action {
        CategoryCommands::List { search, limit } => {
            list::run(search.as_deref(), *limit, ctx, flags)
        }
        CategoryCommands::Get { id } => get::run(id, ctx, flags),
        CategoryCommands::Add { name, items, image } => add::run(
            add::Params {
                name: name.clone(),
                items: items.clone(),
                image: image.clone(),
            },
            ctx,
            flags,
        ),
        CategoryCommands::Update {
            id,
            name,
            items,
            image,
        } => update::run(
            update::Params {
                id: id.clone(),
                name: name.clone(),
                items: items.clone(),
                image: image.clone(),
            },
            ctx,
            flags,
        ),
        CategoryCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}

/// Copy of `category` with its image resolved for display.
fn for_display(category: &Category, fallback: &str) -> Category {
    Category {
        image: resolve_image_path(&category.image, fallback).to_string(),
        ..category.clone()
    }
}
