//! Garimpo Core - Shared types library.
//!
//! This crate provides common types used across all Garimpo components:
//! - `storefront` - Public-facing product listing site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and conditions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
