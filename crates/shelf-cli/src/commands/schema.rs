use shelf_core::entities::{Category, Session, User};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `shelf schema`. Tables make no sense for a schema, so anything but
/// `raw` prints pretty JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Category => schemars::schema_for!(Category),
        SchemaType::User => schemars::schema_for!(User),
        SchemaType::Session => schemars::schema_for!(Session),
    };
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}
