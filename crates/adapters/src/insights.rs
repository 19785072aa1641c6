//! Pre-built insight use cases

use std::sync::Arc;

use stats_view_domain::{Granularity, InsightKind, StatsUseCase, UseCaseMode};

/// Insight use case, constructed once and shared for the process lifetime
#[derive(Debug, Clone)]
pub struct InsightStatsUseCase {
    kind: InsightKind,
}

impl InsightStatsUseCase {
    pub fn new(kind: InsightKind) -> Self {
        Self { kind }
    }

    /// One shared instance per listed kind, in the given order
    pub fn for_kinds(kinds: &[InsightKind]) -> Vec<Arc<dyn StatsUseCase>> {
        kinds
            .iter()
            .map(|kind| {
                tracing::debug!(kind = %kind, "Constructing insight use case");
                Arc::new(Self::new(*kind)) as Arc<dyn StatsUseCase>
            })
            .collect()
    }
}

impl StatsUseCase for InsightStatsUseCase {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn mode(&self) -> UseCaseMode {
        UseCaseMode::ViewAll
    }

    fn granularity(&self) -> Option<Granularity> {
        None
    }

    fn insight_kind(&self) -> Option<InsightKind> {
        Some(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_use_case_exposes_kind() {
        let use_case = InsightStatsUseCase::new(InsightKind::MostPopular);

        assert_eq!(use_case.name(), "most_popular");
        assert_eq!(use_case.insight_kind(), Some(InsightKind::MostPopular));
        assert_eq!(use_case.granularity(), None);
    }

    #[test]
    fn test_for_kinds_builds_one_per_kind() {
        let use_cases = InsightStatsUseCase::for_kinds(&InsightKind::ALL);
        assert_eq!(use_cases.len(), InsightKind::ALL.len());

        for (use_case, kind) in use_cases.iter().zip(InsightKind::ALL) {
            assert_eq!(use_case.insight_kind(), Some(kind));
        }
    }
}
