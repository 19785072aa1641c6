//! stats-view domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: View types, granularities and other value objects
//! - `ports`: Trait definitions for external collaborators (adapters)
//! - `catalog`: Static table mapping view types to providers and titles
//! - `usecases`: Use case resolution and view model assembly

pub mod catalog;
pub mod model;
pub mod ports;
pub mod usecases;

pub use catalog::{CATALOG_VERSION, catalog_fingerprint};
pub use model::*;
pub use ports::*;
