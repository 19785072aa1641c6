//! View-all assembly - binds a resolved use case and its collaborators into a view model

use std::sync::Arc;

use crate::{
    model::{Granularity, StatsSection, StatsViewType, TitleRes, ViewModelKind},
    ports::{
        DateSelector, DateSelectorFactory, Dispatcher, GranularUseCaseFactory, StatsSiteProvider,
        StatsUseCase, ViewAllError, ViewModelFactory,
    },
    usecases::resolve::{ResolvedUseCase, UseCaseResolver},
};

/// View model behind a view-all stats screen
///
/// Owns its date selector; every other collaborator is shared.
pub struct StatsViewAllViewModel {
    main_dispatcher: Arc<dyn Dispatcher>,
    bg_dispatcher: Arc<dyn Dispatcher>,
    use_case: Arc<dyn StatsUseCase>,
    site_provider: Arc<dyn StatsSiteProvider>,
    date_selector: Box<dyn DateSelector>,
    title: TitleRes,
}

impl StatsViewAllViewModel {
    pub fn main_dispatcher(&self) -> &Arc<dyn Dispatcher> {
        &self.main_dispatcher
    }

    pub fn bg_dispatcher(&self) -> &Arc<dyn Dispatcher> {
        &self.bg_dispatcher
    }

    pub fn use_case(&self) -> &Arc<dyn StatsUseCase> {
        &self.use_case
    }

    pub fn site_provider(&self) -> &Arc<dyn StatsSiteProvider> {
        &self.site_provider
    }

    pub fn date_selector(&self) -> &dyn DateSelector {
        self.date_selector.as_ref()
    }

    pub fn title(&self) -> TitleRes {
        self.title
    }
}

impl std::fmt::Debug for StatsViewAllViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsViewAllViewModel")
            .field("main_dispatcher", &self.main_dispatcher.name())
            .field("bg_dispatcher", &self.bg_dispatcher.name())
            .field("use_case", &self.use_case.name())
            .field("site_id", &self.site_provider.site_id())
            .field("section", &self.date_selector.section())
            .field("title", &self.title)
            .finish()
    }
}

/// Compose a view model, building its date selector exactly once
pub fn assemble(
    resolved: ResolvedUseCase,
    main_dispatcher: Arc<dyn Dispatcher>,
    bg_dispatcher: Arc<dyn Dispatcher>,
    site_provider: Arc<dyn StatsSiteProvider>,
    date_selector_factory: &dyn DateSelectorFactory,
    section: StatsSection,
) -> StatsViewAllViewModel {
    let date_selector = date_selector_factory.build(section);

    StatsViewAllViewModel {
        main_dispatcher,
        bg_dispatcher,
        use_case: resolved.use_case,
        site_provider,
        date_selector,
        title: resolved.title,
    }
}

/// Factory bound to one resolved view-all screen
#[derive(Clone)]
pub struct StatsViewAllViewModelFactory {
    main_dispatcher: Arc<dyn Dispatcher>,
    bg_dispatcher: Arc<dyn Dispatcher>,
    resolved: ResolvedUseCase,
    site_provider: Arc<dyn StatsSiteProvider>,
    date_selector_factory: Arc<dyn DateSelectorFactory>,
    section: StatsSection,
}

impl StatsViewAllViewModelFactory {
    pub fn new(
        main_dispatcher: Arc<dyn Dispatcher>,
        bg_dispatcher: Arc<dyn Dispatcher>,
        resolved: ResolvedUseCase,
        site_provider: Arc<dyn StatsSiteProvider>,
        date_selector_factory: Arc<dyn DateSelectorFactory>,
        section: StatsSection,
    ) -> Self {
        Self {
            main_dispatcher,
            bg_dispatcher,
            resolved,
            site_provider,
            date_selector_factory,
            section,
        }
    }

    pub fn resolved(&self) -> &ResolvedUseCase {
        &self.resolved
    }

    pub fn section(&self) -> StatsSection {
        self.section
    }
}

impl ViewModelFactory for StatsViewAllViewModelFactory {
    type ViewModel = StatsViewAllViewModel;

    fn create(&self, requested: ViewModelKind) -> Result<StatsViewAllViewModel, ViewAllError> {
        if requested != ViewModelKind::StatsViewAll {
            return Err(ViewAllError::UnsupportedType { requested });
        }

        Ok(assemble(
            self.resolved.clone(),
            Arc::clone(&self.main_dispatcher),
            Arc::clone(&self.bg_dispatcher),
            Arc::clone(&self.site_provider),
            self.date_selector_factory.as_ref(),
            self.section,
        ))
    }
}

/// Every collaborator a view-all screen is wired from
#[derive(Clone)]
pub struct ViewAllDependencies {
    pub main_dispatcher: Arc<dyn Dispatcher>,
    pub bg_dispatcher: Arc<dyn Dispatcher>,
    pub granular_factories: Vec<Arc<dyn GranularUseCaseFactory>>,
    pub insights_use_cases: Vec<Arc<dyn StatsUseCase>>,
    pub site_provider: Arc<dyn StatsSiteProvider>,
    pub date_selector_factory: Arc<dyn DateSelectorFactory>,
}

/// Builds view model factories for any view type
pub struct StatsViewAllViewModelFactoryBuilder {
    deps: ViewAllDependencies,
}

impl StatsViewAllViewModelFactoryBuilder {
    pub fn new(deps: ViewAllDependencies) -> Self {
        Self { deps }
    }

    pub fn resolver(&self) -> UseCaseResolver<'_> {
        UseCaseResolver::new(&self.deps.granular_factories, &self.deps.insights_use_cases)
    }

    /// Resolve the view type and bind a factory for its screen
    pub fn build(
        &self,
        view_type: StatsViewType,
        granularity: Option<Granularity>,
    ) -> Result<StatsViewAllViewModelFactory, ViewAllError> {
        let resolved = self.resolver().resolve(view_type, granularity)?;
        let section = StatsSection::for_granularity(granularity);

        tracing::debug!(
            view_type = %view_type,
            granularity = ?granularity,
            use_case = resolved.use_case.name(),
            title = %resolved.title,
            section = ?section,
            "Built view-all factory"
        );

        Ok(StatsViewAllViewModelFactory::new(
            Arc::clone(&self.deps.main_dispatcher),
            Arc::clone(&self.deps.bg_dispatcher),
            resolved,
            Arc::clone(&self.deps.site_provider),
            Arc::clone(&self.deps.date_selector_factory),
            section,
        ))
    }

    /// Resolve the view type and create its view model in one step
    pub fn build_view_model(
        &self,
        view_type: StatsViewType,
        granularity: Option<Granularity>,
    ) -> Result<StatsViewAllViewModel, ViewAllError> {
        self.build(view_type, granularity)?
            .create(ViewModelKind::StatsViewAll)
    }
}
