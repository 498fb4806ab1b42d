//! Add/edit form input, as typed.
//!
//! Validation happens here, before any store mutation: a form that fails to
//! parse never reaches the store.

use shelf_core::entities::{Category, NAME_REQUIRED, NewCategory};
use shelf_core::errors::CoreError;

use crate::updates::category::{CategoryUpdate, CategoryUpdateBuilder};

pub const INVALID_ITEM_COUNT: &str = "Item count must be a valid positive number";

/// Raw add/edit form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub item_count: String,
    pub image_url: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            item_count: "0".into(),
            image_url: String::new(),
        }
    }
}

impl CategoryForm {
    /// Prefill an edit form from an existing category.
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            item_count: category.item_count.to_string(),
            image_url: category.image.clone(),
        }
    }

    /// Validate as input for a new category. A blank image is left for the
    /// store to default.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the message to show inline.
    pub fn into_new(self) -> Result<NewCategory, CoreError> {
        let name = require_name(self.name)?;
        let item_count = parse_item_count(&self.item_count)?;
        NewCategory::new(name, item_count, Some(self.image_url))
    }

    /// Validate as a full edit: every field is written.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the message to show inline.
    pub fn into_update(self) -> Result<CategoryUpdate, CoreError> {
        let name = require_name(self.name)?;
        let item_count = parse_item_count(&self.item_count)?;
        Ok(CategoryUpdateBuilder::new()
            .name(name)
            .item_count(item_count)
            .image(self.image_url)
            .build())
    }
}

/// Parse an item count typed by a user. Negative, fractional, non-numeric,
/// and out-of-range input is rejected.
///
/// # Errors
///
/// Returns `CoreError::Validation` carrying [`INVALID_ITEM_COUNT`].
pub fn parse_item_count(raw: &str) -> Result<u32, CoreError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CoreError::Validation(INVALID_ITEM_COUNT.into()))
}

fn require_name(name: String) -> Result<String, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(NAME_REQUIRED.into()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn form(name: &str, count: &str, image: &str) -> CategoryForm {
        CategoryForm {
            name: name.into(),
            item_count: count.into(),
            image_url: image.into(),
        }
    }

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    fn accepts_non_negative_counts(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_item_count(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("abc")]
    #[case("3.5")]
    #[case("99999999999")]
    fn rejects_invalid_counts(#[case] raw: &str) {
        let err = parse_item_count(raw).unwrap_err();
        assert_eq!(err.to_string(), INVALID_ITEM_COUNT);
    }

    #[test]
    fn empty_name_is_reported_first() {
        let err = form("", "-3", "").into_new().unwrap_err();
        assert_eq!(err.to_string(), NAME_REQUIRED);
    }

    #[test]
    fn new_form_leaves_blank_image_unset() {
        let input = form("Hats", "36", "").into_new().unwrap();
        assert_eq!(input.name(), "Hats");
        assert_eq!(input.item_count(), 36);
        assert!(input.image().is_none());
    }

    #[test]
    fn edit_form_sets_every_field() {
        let update = form("Caps", "12", "https://example.com/caps.jpg")
            .into_update()
            .unwrap();
        assert_eq!(update.name.as_deref(), Some("Caps"));
        assert_eq!(update.item_count, Some(12));
        assert_eq!(update.image.as_deref(), Some("https://example.com/caps.jpg"));
    }

    #[test]
    fn prefill_roundtrips_existing_category() {
        let category = Category {
            id: "3".into(),
            name: "Accessories".into(),
            item_count: 73,
            image: "https://example.com/a.jpg".into(),
        };
        let prefilled = CategoryForm::from_category(&category);
        assert_eq!(prefilled.item_count, "73");
        let update = prefilled.into_update().unwrap();
        assert_eq!(update.name.as_deref(), Some("Accessories"));
    }
}
