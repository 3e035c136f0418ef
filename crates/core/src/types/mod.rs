//! Core types for Garimpo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod condition;
pub mod id;
pub mod price;

pub use condition::Condition;
pub use id::*;
pub use price::Price;
