//! Partial update builders.

pub mod category;
