use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthCommands, CategoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Manage categories (requires a session).
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Show what the route guard decides for a path.
    Route(RouteArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
    /// Interactive session over stdin with long-lived stores.
    Shell,
}

/// Arguments for `shelf route`.
#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Path to resolve, e.g. `/dashboard/categories`.
    pub path: String,
}

/// Arguments for `shelf schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Category,
    User,
    Session,
}
