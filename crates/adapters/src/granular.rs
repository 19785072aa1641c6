//! Granular use case factories

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use stats_view_domain::{
    GranularFamily, GranularUseCaseFactory, Granularity, StatsUseCase, UseCaseMode,
};

/// Use case for one granular family and time bucket
#[derive(Debug, Clone)]
pub struct GranularStatsUseCase {
    name: String,
    family: GranularFamily,
    granularity: Granularity,
    mode: UseCaseMode,
}

impl GranularStatsUseCase {
    pub fn family(&self) -> GranularFamily {
        self.family
    }
}

impl StatsUseCase for GranularStatsUseCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> UseCaseMode {
        self.mode
    }

    fn granularity(&self) -> Option<Granularity> {
        Some(self.granularity)
    }
}

/// Stub factory that builds [`GranularStatsUseCase`]s for a single family
pub struct StubGranularFactory {
    family: GranularFamily,
    builds: AtomicUsize,
}

impl StubGranularFactory {
    pub fn new(family: GranularFamily) -> Self {
        Self {
            family,
            builds: AtomicUsize::new(0),
        }
    }

    /// Number of use cases built so far
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// One factory per listed family, in the given order
    pub fn for_families(families: &[GranularFamily]) -> Vec<Arc<dyn GranularUseCaseFactory>> {
        families
            .iter()
            .map(|family| Arc::new(Self::new(*family)) as Arc<dyn GranularUseCaseFactory>)
            .collect()
    }
}

impl GranularUseCaseFactory for StubGranularFactory {
    fn family(&self) -> GranularFamily {
        self.family
    }

    fn build(&self, granularity: Granularity, mode: UseCaseMode) -> Arc<dyn StatsUseCase> {
        self.builds.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            family = %self.family,
            granularity = %granularity,
            mode = ?mode,
            "Building granular use case"
        );

        Arc::new(GranularStatsUseCase {
            name: format!("{}_{}", self.family, granularity),
            family: self.family,
            granularity,
            mode,
        })
    }
}
