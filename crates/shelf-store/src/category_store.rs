//! The in-memory category collection.

use shelf_core::entities::{Category, NAME_REQUIRED, NewCategory};
use shelf_core::errors::CoreError;
use shelf_core::ids::{PREFIX_CATEGORY, format_id, random_suffix};
use shelf_core::search::filter_by_name;

use crate::error::StoreError;
use crate::seed::seed_catalog;
use crate::updates::category::CategoryUpdate;

const MAX_ID_ATTEMPTS: u32 = 16;

/// Ordered, in-memory category collection.
///
/// Nothing is persisted: a new store starts from whatever it was built with.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<Category>,
    default_image: String,
    revision: u64,
}

impl CategoryStore {
    /// An empty store. `default_image` is assigned to categories added
    /// without an image.
    #[must_use]
    pub fn new(default_image: impl Into<String>) -> Self {
        Self::from_categories(Vec::new(), default_image)
    }

    /// A store holding the starter catalog.
    #[must_use]
    pub fn with_seed_catalog(default_image: impl Into<String>) -> Self {
        Self::from_categories(seed_catalog(), default_image)
    }

    #[must_use]
    pub fn from_categories(categories: Vec<Category>, default_image: impl Into<String>) -> Self {
        Self {
            categories,
            default_image: default_image.into(),
            revision: 0,
        }
    }

    /// Current categories in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no category has `id`.
    pub fn get(&self, id: &str) -> Result<&Category, StoreError> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Case-insensitive name search, in insertion order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Category> {
        filter_by_name(&self.categories, term)
    }

    /// Append a new category with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdExhausted` or `StoreError::Core` if no unused ID
    /// could be generated.
    pub fn add(&mut self, input: NewCategory) -> Result<Category, StoreError> {
        let id = self.allocate_id()?;
        let category = input.into_category(id, &self.default_image);
        tracing::debug!(id = %category.id, name = %category.name, "category added");

        self.categories.push(category.clone());
        self.bump();
        Ok(category)
    }

    /// Merge `update` into the category with `id`. The ID never changes.
    ///
    /// An empty update returns the category untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `id` is absent, or a validation error
    /// if the update would blank the name. The collection is unchanged on error.
    pub fn update(&mut self, id: &str, update: CategoryUpdate) -> Result<Category, StoreError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(CoreError::Validation(NAME_REQUIRED.into()).into());
        }

        let default_image = self.default_image.clone();
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if update.is_empty() {
            return Ok(category.clone());
        }

        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(item_count) = update.item_count {
            category.item_count = item_count;
        }
        if let Some(image) = update.image {
            category.image = if image.trim().is_empty() {
                default_image
            } else {
                image
            };
        }

        let updated = category.clone();
        tracing::debug!(id = %updated.id, "category updated");
        self.bump();
        Ok(updated)
    }

    /// Remove the category with `id`. Returns whether anything was removed;
    /// deleting a missing ID is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        let removed = self.categories.len() != before;
        if removed {
            tracing::debug!(%id, "category deleted");
            self.bump();
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Incremented on every effective mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    fn allocate_id(&self) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = format_id(PREFIX_CATEGORY, &random_suffix()?);
            if !self.categories.iter().any(|category| category.id == id) {
                return Ok(id);
            }
        }
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    const fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::updates::category::CategoryUpdateBuilder;

    const DEFAULT_IMAGE: &str = "https://example.com/default.png";

    fn seeded() -> CategoryStore {
        CategoryStore::with_seed_catalog(DEFAULT_IMAGE)
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let mut store = seeded();
        let before = store.len();

        let created = store
            .add(NewCategory::new("Shoes", 10, Some("https://example.com/shoes.jpg".into())).unwrap())
            .unwrap();

        assert_eq!(store.len(), before + 1);
        assert!(created.id.starts_with("cat-"));
        assert_eq!(created.name, "Shoes");
        assert_eq!(created.item_count, 10);
        assert_eq!(created.image, "https://example.com/shoes.jpg");
        assert_eq!(store.list().last(), Some(&created));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn add_defaults_missing_image() {
        let mut store = CategoryStore::new(DEFAULT_IMAGE);
        let created = store.add(NewCategory::new("Bags", 0, None).unwrap()).unwrap();
        assert_eq!(created.image, DEFAULT_IMAGE);
    }

    #[test]
    fn added_ids_are_unique() {
        let mut store = CategoryStore::new(DEFAULT_IMAGE);
        for n in 0..50 {
            store
                .add(NewCategory::new(format!("Category {n}"), n, None).unwrap())
                .unwrap();
        }
        let mut ids: Vec<&str> = store.list().iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut store = seeded();
        let before = store.get("3").unwrap().clone();

        let updated = store
            .update("3", CategoryUpdateBuilder::new().item_count(80).build())
            .unwrap();

        assert_eq!(updated.id, "3");
        assert_eq!(updated.item_count, 80);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.image, before.image);
        assert_eq!(store.get("3").unwrap(), &updated);
    }

    #[test]
    fn update_missing_id_is_not_found_and_unchanged() {
        let mut store = seeded();
        let snapshot = store.list().to_vec();

        let err = store
            .update("nope", CategoryUpdateBuilder::new().name("X").build())
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.list(), snapshot.as_slice());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut store = seeded();
        let err = store
            .update("1", CategoryUpdateBuilder::new().name("  ").build())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get("1").unwrap().name, "Men Clothes");
    }

    #[test]
    fn update_with_blank_image_restores_default() {
        let mut store = seeded();
        let updated = store
            .update("2", CategoryUpdateBuilder::new().image("").build())
            .unwrap();
        assert_eq!(updated.image, DEFAULT_IMAGE);
    }

    #[test]
    fn empty_update_is_a_noop() {
        let mut store = seeded();
        let current = store.update("4", CategoryUpdate::default()).unwrap();
        assert_eq!(current.name, "Cotton Clothes");
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = seeded();
        let before = store.len();

        assert!(store.delete("5"));
        assert_eq!(store.len(), before - 1);
        assert!(store.get("5").is_err());

        assert!(!store.delete("5"));
        assert_eq!(store.len(), before - 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = seeded();
        let names: Vec<&str> = store.search("CLOTHES").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Men Clothes",
                "Women Clothes",
                "Cotton Clothes",
                "Summer Clothes",
                "Wedding Clothes",
                "Casual Clothes",
            ]
        );
        assert_eq!(store.search("").len(), store.len());
        assert!(store.search("furniture").is_empty());
    }
}
