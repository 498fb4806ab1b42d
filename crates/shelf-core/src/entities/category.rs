use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const NAME_REQUIRED: &str = "Category name is required";

/// A named grouping of catalog items with a display image and item count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub item_count: u32,
    pub image: String,
}

/// Validated input for creating a category. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: String,
    item_count: u32,
    image: Option<String>,
}

impl NewCategory {
    /// Build a new category input.
    ///
    /// `image` is optional; the store substitutes its default image when it
    /// is `None` or blank.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        item_count: u32,
        image: Option<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation(NAME_REQUIRED.into()));
        }
        Ok(Self {
            name,
            item_count,
            image: image.filter(|url| !url.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Materialize into a `Category` with the given ID.
    #[must_use]
    pub fn into_category(self, id: String, default_image: &str) -> Category {
        Category {
            id,
            name: self.name,
            item_count: self.item_count,
            image: self.image.unwrap_or_else(|| default_image.to_string()),
        }
    }
}
