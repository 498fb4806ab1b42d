//! Form input flowing into the category store.

use pretty_assertions::assert_eq;
use rstest::rstest;
use shelf_core::entities::NAME_REQUIRED;
use shelf_store::form::{CategoryForm, INVALID_ITEM_COUNT};
use shelf_store::updates::category::CategoryUpdateBuilder;
use shelf_store::{CategoryStore, StoreError};

const DEFAULT_IMAGE: &str = "https://placehold.co/600x400?text=New+Category";

fn form(name: &str, item_count: &str, image_url: &str) -> CategoryForm {
    CategoryForm {
        name: name.into(),
        item_count: item_count.into(),
        image_url: image_url.into(),
    }
}

#[test]
fn add_form_appends_and_is_searchable() {
    let mut store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);

    let created = store
        .add(form("Winter Coats", "12", "").into_new().unwrap())
        .unwrap();

    assert_eq!(created.image, DEFAULT_IMAGE);
    assert_eq!(store.len(), 10);
    let hits: Vec<&str> = store.search("coats").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(hits, vec![created.id.as_str()]);
}

#[rstest]
#[case("-3")]
#[case("abc")]
#[case("1.5")]
#[case("")]
fn invalid_item_count_never_reaches_store(#[case] raw: &str) {
    let store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);
    let err = form("Socks", raw, "").into_new().unwrap_err();

    assert_eq!(err.to_string(), INVALID_ITEM_COUNT);
    assert_eq!(store.len(), 9);
    assert_eq!(store.revision(), 0);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_name_never_reaches_store(#[case] name: &str) {
    let mut store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);

    let add = form(name, "5", "").into_new().unwrap_err();
    assert_eq!(add.to_string(), NAME_REQUIRED);

    let update = form(name, "5", "").into_update().unwrap_err();
    assert_eq!(update.to_string(), NAME_REQUIRED);

    let err = store
        .update("1", CategoryUpdateBuilder::new().name(name).build())
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(store.len(), 9);
    assert_eq!(store.revision(), 0);
    assert_eq!(store.get("1").unwrap().name, "Men Clothes");
}

#[test]
fn edit_form_round_trips_through_store() {
    let mut store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);
    let hats = store.get("9").unwrap().clone();

    let mut edit = CategoryForm::from_category(&hats);
    edit.name = "Caps & Hats".into();
    let updated = store.update("9", edit.into_update().unwrap()).unwrap();

    assert_eq!(updated.id, "9");
    assert_eq!(updated.name, "Caps & Hats");
    assert_eq!(updated.item_count, hats.item_count);
    assert_eq!(updated.image, hats.image);
}

#[test]
fn deleted_category_cannot_be_updated() {
    let mut store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);
    assert!(store.delete("1"));

    let update = form("Men", "1", "").into_update().unwrap();
    let err = store.update("1", update).unwrap_err();

    assert!(matches!(err, StoreError::NotFound { ref id } if id == "1"));
    assert!(store.get("1").is_err());
    assert_eq!(store.search("women clothes").len(), 1);
}

#[test]
fn mutations_on_other_ids_leave_category_alone() {
    let mut store = CategoryStore::with_seed_catalog(DEFAULT_IMAGE);
    let accessories = store.get("3").unwrap().clone();

    store.delete("2");
    store
        .update("4", form("Linen", "7", "").into_update().unwrap())
        .unwrap();
    store.add(form("Belts", "4", "").into_new().unwrap()).unwrap();

    assert_eq!(store.get("3").unwrap(), &accessories);
}
