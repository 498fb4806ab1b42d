//! # shelf-store
//!
//! In-memory category state for Shelf.
//!
//! [`CategoryStore`] holds the ordered category collection and its mutation
//! contract. [`form::CategoryForm`] turns raw form text into validated store
//! inputs, and [`updates::category::CategoryUpdateBuilder`] builds partial
//! updates.

pub mod category_store;
pub mod error;
pub mod form;
pub mod seed;
pub mod updates;

pub use category_store::CategoryStore;
pub use error::StoreError;
