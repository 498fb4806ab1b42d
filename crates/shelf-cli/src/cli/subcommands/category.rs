use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List categories, optionally filtered by name.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a category by ID.
    Get { id: String },
    /// Add a category.
    Add {
        #[arg(long)]
        name: String,
        /// Item count (non-negative integer).
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        items: String,
        /// Image URL; the configured default is used when omitted.
        #[arg(long)]
        image: Option<String>,
    },
    /// Update a category. Pass an empty `--image` to restore the default.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        items: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a category. Deleting a missing ID is not an error.
    Delete { id: String },
}
