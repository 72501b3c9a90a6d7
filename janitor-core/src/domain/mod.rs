//! Core domain types
//!
//! These types mirror the registry API responses the janitor consumes.
//! They are produced by `janitor-client` and passed through the command
//! chain without being stored anywhere.

pub mod image;
pub mod registry;
pub mod repository;
