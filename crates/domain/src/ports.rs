//! Port definitions (traits) for external collaborators
//!
//! The view-all factory only wires these together. Adapters implement them
//! to connect to real data sources, schedulers and date pickers.

use std::sync::Arc;
use thiserror::Error;

use crate::model::{
    GranularFamily, Granularity, InsightKind, ProviderKey, ResolutionPath, StatsSection,
    StatsViewType, UseCaseMode, ViewModelKind,
};

/// Error type for resolving and assembling view-all screens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewAllError {
    /// The view type has no entry in the table of the requested path
    #[error("Invalid {path} stats type: {view_type}")]
    InvalidArgument {
        view_type: StatsViewType,
        path: ResolutionPath,
    },
    /// A table entry exists but no injected provider matches it
    #[error("No {provider} wired for stats type {view_type}")]
    LookupExhausted {
        view_type: StatsViewType,
        provider: ProviderKey,
    },
    /// Generic creation asked for a view model this factory does not produce
    #[error("ViewModel Not Found: {requested}")]
    UnsupportedType { requested: ViewModelKind },
}

impl ViewAllError {
    /// True for errors caused by the injected collaborators rather than the caller
    pub fn is_wiring_defect(&self) -> bool {
        matches!(
            self,
            ViewAllError::LookupExhausted { .. } | ViewAllError::UnsupportedType { .. }
        )
    }
}

/// A unit that knows how to load and present the data of one stats view
pub trait StatsUseCase: Send + Sync {
    /// Stable name, used for diagnostics
    fn name(&self) -> &str;

    fn mode(&self) -> UseCaseMode;

    /// Time bucket the use case was built for, `None` for insights
    fn granularity(&self) -> Option<Granularity>;

    /// Identity of a pre-built insight use case
    fn insight_kind(&self) -> Option<InsightKind> {
        None
    }
}

/// Port for building granular use cases on demand
pub trait GranularUseCaseFactory: Send + Sync {
    /// Family this factory belongs to
    fn family(&self) -> GranularFamily;

    /// Build a fresh use case for the given time bucket
    fn build(&self, granularity: Granularity, mode: UseCaseMode) -> Arc<dyn StatsUseCase>;
}

/// Port exposing the site whose stats are shown
pub trait StatsSiteProvider: Send + Sync {
    fn site_id(&self) -> u64;

    fn site_name(&self) -> &str;
}

/// Date range selector owned by a single view model
pub trait DateSelector: Send + Sync {
    fn section(&self) -> StatsSection;
}

/// Port for building date selectors
pub trait DateSelectorFactory: Send + Sync {
    fn build(&self, section: StatsSection) -> Box<dyn DateSelector>;
}

/// Opaque scheduling handle threaded through to the view model
pub trait Dispatcher: Send + Sync {
    fn name(&self) -> &str;
}

/// Generic "produce a view model of the requested kind" protocol
pub trait ViewModelFactory {
    type ViewModel;

    fn create(&self, requested: ViewModelKind) -> Result<Self::ViewModel, ViewAllError>;
}
