//! Janitor Core
//!
//! Core types for the registry janitor.
//!
//! This crate contains the domain types shared between the registry client
//! (which produces them from API responses) and the runner (which threads
//! them from one cleanup stage to the next).

pub mod domain;
