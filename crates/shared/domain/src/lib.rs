//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, rendering or randomness, just the catalog data,
//! configuration and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;

pub use crate::catalog::{AvatarOptions, Feature, FeatureSet};
