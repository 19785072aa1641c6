//! Use case resolution - picks the use case and title behind a view-all screen

use std::sync::Arc;

use crate::{
    catalog::{granular_entry, insights_entry},
    model::{Granularity, ProviderKey, ResolutionPath, StatsViewType, TitleRes, UseCaseMode},
    ports::{GranularUseCaseFactory, StatsUseCase, ViewAllError},
};

/// A use case paired with the title of its screen
#[derive(Clone)]
pub struct ResolvedUseCase {
    pub use_case: Arc<dyn StatsUseCase>,
    pub title: TitleRes,
}

impl std::fmt::Debug for ResolvedUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedUseCase")
            .field("use_case", &self.use_case.name())
            .field("title", &self.title)
            .finish()
    }
}

/// Resolves view types against the injected provider collections
///
/// Granular views get a freshly built use case from the first factory of the
/// matching family. Insights views get the shared, pre-built instance whose
/// kind matches; no construction happens on that path.
#[derive(Clone, Copy)]
pub struct UseCaseResolver<'a> {
    granular_factories: &'a [Arc<dyn GranularUseCaseFactory>],
    insights_use_cases: &'a [Arc<dyn StatsUseCase>],
}

impl<'a> UseCaseResolver<'a> {
    pub fn new(
        granular_factories: &'a [Arc<dyn GranularUseCaseFactory>],
        insights_use_cases: &'a [Arc<dyn StatsUseCase>],
    ) -> Self {
        Self {
            granular_factories,
            insights_use_cases,
        }
    }

    /// Resolve a view type; the presence of `granularity` selects the path
    pub fn resolve(
        &self,
        view_type: StatsViewType,
        granularity: Option<Granularity>,
    ) -> Result<ResolvedUseCase, ViewAllError> {
        match granularity {
            Some(granularity) => self.resolve_granular(view_type, granularity),
            None => self.resolve_insights(view_type),
        }
    }

    fn resolve_granular(
        &self,
        view_type: StatsViewType,
        granularity: Granularity,
    ) -> Result<ResolvedUseCase, ViewAllError> {
        let entry = granular_entry(view_type).ok_or(ViewAllError::InvalidArgument {
            view_type,
            path: ResolutionPath::Granular,
        })?;

        let factory = self
            .granular_factories
            .iter()
            .find(|factory| factory.family() == entry.family)
            .ok_or(ViewAllError::LookupExhausted {
                view_type,
                provider: ProviderKey::Granular(entry.family),
            })?;

        Ok(ResolvedUseCase {
            use_case: factory.build(granularity, UseCaseMode::ViewAll),
            title: entry.title,
        })
    }

    fn resolve_insights(&self, view_type: StatsViewType) -> Result<ResolvedUseCase, ViewAllError> {
        let entry = insights_entry(view_type).ok_or(ViewAllError::InvalidArgument {
            view_type,
            path: ResolutionPath::Insights,
        })?;

        let use_case = self
            .insights_use_cases
            .iter()
            .find(|use_case| use_case.insight_kind() == Some(entry.kind))
            .ok_or(ViewAllError::LookupExhausted {
                view_type,
                provider: ProviderKey::Insight(entry.kind),
            })?;

        Ok(ResolvedUseCase {
            use_case: Arc::clone(use_case),
            title: entry.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GranularFamily, InsightKind};
    use std::sync::Mutex;

    struct FakeUseCase {
        name: String,
        mode: UseCaseMode,
        granularity: Option<Granularity>,
        kind: Option<InsightKind>,
    }

    impl StatsUseCase for FakeUseCase {
        fn name(&self) -> &str {
            &self.name
        }

        fn mode(&self) -> UseCaseMode {
            self.mode
        }

        fn granularity(&self) -> Option<Granularity> {
            self.granularity
        }

        fn insight_kind(&self) -> Option<InsightKind> {
            self.kind
        }
    }

    struct FakeFactory {
        family: GranularFamily,
        builds: Mutex<Vec<(Granularity, UseCaseMode)>>,
    }

    impl FakeFactory {
        fn new(family: GranularFamily) -> Arc<Self> {
            Arc::new(Self {
                family,
                builds: Mutex::new(vec![]),
            })
        }
    }

    impl GranularUseCaseFactory for FakeFactory {
        fn family(&self) -> GranularFamily {
            self.family
        }

        fn build(&self, granularity: Granularity, mode: UseCaseMode) -> Arc<dyn StatsUseCase> {
            self.builds.lock().unwrap().push((granularity, mode));
            Arc::new(FakeUseCase {
                name: self.family.as_str().to_string(),
                mode,
                granularity: Some(granularity),
                kind: None,
            })
        }
    }

    fn insight(kind: InsightKind) -> Arc<dyn StatsUseCase> {
        Arc::new(FakeUseCase {
            name: kind.as_str().to_string(),
            mode: UseCaseMode::Block,
            granularity: None,
            kind: Some(kind),
        })
    }

    fn all_factories() -> Vec<Arc<dyn GranularUseCaseFactory>> {
        GranularFamily::ALL
            .into_iter()
            .map(|family| FakeFactory::new(family) as Arc<dyn GranularUseCaseFactory>)
            .collect()
    }

    fn all_insights() -> Vec<Arc<dyn StatsUseCase>> {
        InsightKind::ALL.into_iter().map(insight).collect()
    }

    #[test]
    fn test_clicks_week_uses_clicks_factory() {
        let clicks = FakeFactory::new(GranularFamily::Clicks);
        let authors = FakeFactory::new(GranularFamily::Authors);
        let factories: Vec<Arc<dyn GranularUseCaseFactory>> = vec![
            authors.clone() as Arc<dyn GranularUseCaseFactory>,
            clicks.clone(),
        ];
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let resolved = resolver
            .resolve(StatsViewType::Clicks, Some(Granularity::Weeks))
            .unwrap();

        assert_eq!(resolved.title.key(), "stats_view_clicks");
        assert_eq!(resolved.use_case.name(), "clicks");
        assert_eq!(resolved.use_case.granularity(), Some(Granularity::Weeks));
        assert_eq!(
            *clicks.builds.lock().unwrap(),
            vec![(Granularity::Weeks, UseCaseMode::ViewAll)]
        );
        assert!(authors.builds.lock().unwrap().is_empty());
    }

    #[test]
    fn test_every_granular_view_resolves_through_its_family() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let expected = [
            (StatsViewType::TopPostsAndPages, "posts_and_pages", "stats_view_top_posts_and_pages"),
            (StatsViewType::Referrers, "posts_and_pages", "stats_view_referrers"),
            (StatsViewType::Clicks, "clicks", "stats_view_clicks"),
            (StatsViewType::Authors, "authors", "stats_view_authors"),
            (StatsViewType::Geoviews, "country_views", "stats_view_countries"),
            (StatsViewType::SearchTerms, "search_terms", "stats_view_search_terms"),
            (StatsViewType::VideoPlays, "country_views", "stats_view_videos"),
        ];

        for (view_type, family, title) in expected {
            for granularity in Granularity::ALL {
                let resolved = resolver.resolve(view_type, Some(granularity)).unwrap();
                assert_eq!(resolved.use_case.name(), family, "{}", view_type);
                assert_eq!(resolved.use_case.mode(), UseCaseMode::ViewAll);
                assert_eq!(resolved.title.key(), title);
            }
        }
    }

    #[test]
    fn test_granular_builds_fresh_instance_each_call() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let first = resolver
            .resolve(StatsViewType::Authors, Some(Granularity::Days))
            .unwrap();
        let second = resolver
            .resolve(StatsViewType::Authors, Some(Granularity::Days))
            .unwrap();

        assert!(!Arc::ptr_eq(&first.use_case, &second.use_case));
    }

    #[test]
    fn test_first_matching_factory_wins() {
        let first = FakeFactory::new(GranularFamily::SearchTerms);
        let second = FakeFactory::new(GranularFamily::SearchTerms);
        let factories: Vec<Arc<dyn GranularUseCaseFactory>> = vec![
            first.clone() as Arc<dyn GranularUseCaseFactory>,
            second.clone(),
        ];
        let resolver = UseCaseResolver::new(&factories, &[]);

        resolver
            .resolve(StatsViewType::SearchTerms, Some(Granularity::Years))
            .unwrap();

        assert_eq!(first.builds.lock().unwrap().len(), 1);
        assert!(second.builds.lock().unwrap().is_empty());
    }

    #[test]
    fn test_insights_return_shared_instance() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let expected = [
            (StatsViewType::Followers, "stats_view_followers"),
            (StatsViewType::Comments, "stats_view_comments"),
            (StatsViewType::TagsAndCategories, "stats_view_tags_and_categories"),
            (StatsViewType::InsightsAllTime, "stats_insights_all_time_stats"),
            (StatsViewType::InsightsLatestPostSummary, "stats_insights_latest_post_summary"),
            (StatsViewType::InsightsMostPopular, "stats_insights_popular"),
            (StatsViewType::InsightsToday, "stats_insights_today"),
            (StatsViewType::Publicize, "stats_view_publicize"),
            (StatsViewType::DetailMonthsAndYears, "stats_detail_months_and_years"),
            (StatsViewType::DetailAverageViewsPerDay, "stats_detail_average_views_per_day"),
        ];

        for (view_type, title) in expected {
            let first = resolver.resolve(view_type, None).unwrap();
            let second = resolver.resolve(view_type, None).unwrap();

            assert!(Arc::ptr_eq(&first.use_case, &second.use_case), "{}", view_type);
            assert!(insights.iter().any(|u| Arc::ptr_eq(u, &first.use_case)));
            assert_eq!(first.title.key(), title);
        }
    }

    #[test]
    fn test_insights_view_with_granularity_is_invalid() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let err = resolver
            .resolve(StatsViewType::Followers, Some(Granularity::Months))
            .unwrap_err();

        assert_eq!(
            err,
            ViewAllError::InvalidArgument {
                view_type: StatsViewType::Followers,
                path: ResolutionPath::Granular,
            }
        );
        assert_eq!(err.to_string(), "Invalid granular stats type: FOLLOWERS");
    }

    #[test]
    fn test_granular_view_without_granularity_is_invalid() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        let err = resolver.resolve(StatsViewType::Clicks, None).unwrap_err();

        assert!(matches!(
            err,
            ViewAllError::InvalidArgument {
                view_type: StatsViewType::Clicks,
                path: ResolutionPath::Insights,
            }
        ));
    }

    #[test]
    fn test_unmapped_view_is_invalid_on_both_paths() {
        let factories = all_factories();
        let insights = all_insights();
        let resolver = UseCaseResolver::new(&factories, &insights);

        for granularity in [None, Some(Granularity::Days)] {
            let err = resolver
                .resolve(StatsViewType::DetailRecentWeeks, granularity)
                .unwrap_err();
            assert!(err.to_string().contains("DETAIL_RECENT_WEEKS"));
            assert!(!err.is_wiring_defect());
        }
    }

    #[test]
    fn test_missing_factory_is_lookup_exhausted() {
        let factories: Vec<Arc<dyn GranularUseCaseFactory>> =
            vec![FakeFactory::new(GranularFamily::Clicks) as Arc<dyn GranularUseCaseFactory>];
        let resolver = UseCaseResolver::new(&factories, &[]);

        let err = resolver
            .resolve(StatsViewType::VideoPlays, Some(Granularity::Days))
            .unwrap_err();

        assert_eq!(
            err,
            ViewAllError::LookupExhausted {
                view_type: StatsViewType::VideoPlays,
                provider: ProviderKey::Granular(GranularFamily::CountryViews),
            }
        );
        assert!(err.is_wiring_defect());
    }

    #[test]
    fn test_missing_insight_is_lookup_exhausted() {
        let insights = vec![insight(InsightKind::Comments)];
        let resolver = UseCaseResolver::new(&[], &insights);

        let err = resolver.resolve(StatsViewType::Publicize, None).unwrap_err();

        assert_eq!(
            err,
            ViewAllError::LookupExhausted {
                view_type: StatsViewType::Publicize,
                provider: ProviderKey::Insight(InsightKind::Publicize),
            }
        );
    }
}
