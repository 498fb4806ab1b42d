//! # shelf-core
//!
//! Core types, ID generation, and error types for Shelf.
//!
//! This crate provides the foundational types shared across all Shelf crates:
//! - Entity structs for categories, users, and sessions
//! - The authentication state machine consumed by the route guard
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types
//! - Route parsing and dashboard gating
//! - User-facing notices and image path helpers

pub mod entities;
pub mod errors;
pub mod ids;
pub mod image;
pub mod notice;
pub mod route;
pub mod search;
