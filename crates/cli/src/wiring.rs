//! Builds the view-all dependencies from configuration

use std::sync::Arc;

use stats_view_adapters::{
    InsightStatsUseCase, NamedDispatcher, StaticSiteProvider, StubDateSelectorFactory,
    StubGranularFactory,
};
use stats_view_domain::usecases::{StatsViewAllViewModelFactoryBuilder, ViewAllDependencies};

use crate::config::AppConfig;

pub fn dependencies(config: &AppConfig) -> ViewAllDependencies {
    tracing::debug!(
        granular_families = ?config.wiring.granular_families,
        insights = ?config.wiring.insights,
        "Wiring view-all providers"
    );

    ViewAllDependencies {
        main_dispatcher: Arc::new(NamedDispatcher::new(&config.dispatchers.main)),
        bg_dispatcher: Arc::new(NamedDispatcher::new(&config.dispatchers.background)),
        granular_factories: StubGranularFactory::for_families(&config.wiring.granular_families),
        insights_use_cases: InsightStatsUseCase::for_kinds(&config.wiring.insights),
        site_provider: Arc::new(StaticSiteProvider::new(config.site.id, &config.site.name)),
        date_selector_factory: Arc::new(StubDateSelectorFactory::new()),
    }
}

pub fn builder(config: &AppConfig) -> StatsViewAllViewModelFactoryBuilder {
    StatsViewAllViewModelFactoryBuilder::new(dependencies(config))
}
