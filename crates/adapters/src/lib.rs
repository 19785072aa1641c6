//! stats-view adapters crate
//!
//! This crate contains in-process adapters implementing the domain ports:
//! - `granular`: Granular use case factories, one per family
//! - `insights`: Pre-built insight use cases, one per kind
//! - `date_selector`: Date selector factory
//! - `site`: Static site provider
//! - `dispatcher`: Named scheduling handles

pub mod date_selector;
pub mod dispatcher;
pub mod granular;
pub mod insights;
pub mod site;

pub use date_selector::{StatsDateSelector, StubDateSelectorFactory};
pub use dispatcher::NamedDispatcher;
pub use granular::{GranularStatsUseCase, StubGranularFactory};
pub use insights::InsightStatsUseCase;
pub use site::StaticSiteProvider;
