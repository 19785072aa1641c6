//! Static view catalog
//!
//! Maps every [`StatsViewType`] to the provider that serves its view-all
//! screen and the title shown above it. Granular and insights views live in
//! disjoint tables; a view type found in neither has no view-all screen.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::{GranularFamily, InsightKind, ProviderKey, ResolutionPath, StatsViewType, TitleRes};

/// Bumped whenever an entry is added, removed or remapped
pub const CATALOG_VERSION: u32 = 1;

/// Granular table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GranularEntry {
    pub family: GranularFamily,
    pub title: TitleRes,
}

/// Insights table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightsEntry {
    pub kind: InsightKind,
    pub title: TitleRes,
}

/// One row of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub view_type: StatsViewType,
    pub path: Option<ResolutionPath>,
    pub provider: Option<ProviderKey>,
    pub title: Option<TitleRes>,
}

/// Look up a view type in the granular table
pub fn granular_entry(view_type: StatsViewType) -> Option<GranularEntry> {
    use GranularFamily::*;

    // Referrers shares the posts-and-pages family, video plays the country views one.
    let (family, title) = match view_type {
        StatsViewType::TopPostsAndPages => (PostsAndPages, "stats_view_top_posts_and_pages"),
        StatsViewType::Referrers => (PostsAndPages, "stats_view_referrers"),
        StatsViewType::Clicks => (Clicks, "stats_view_clicks"),
        StatsViewType::Authors => (Authors, "stats_view_authors"),
        StatsViewType::Geoviews => (CountryViews, "stats_view_countries"),
        StatsViewType::SearchTerms => (SearchTerms, "stats_view_search_terms"),
        StatsViewType::VideoPlays => (CountryViews, "stats_view_videos"),
        _ => return None,
    };

    Some(GranularEntry {
        family,
        title: TitleRes::new(title),
    })
}

/// Look up a view type in the insights table
pub fn insights_entry(view_type: StatsViewType) -> Option<InsightsEntry> {
    use InsightKind::*;

    let (kind, title) = match view_type {
        StatsViewType::Followers => (Followers, "stats_view_followers"),
        StatsViewType::Comments => (Comments, "stats_view_comments"),
        StatsViewType::TagsAndCategories => (TagsAndCategories, "stats_view_tags_and_categories"),
        StatsViewType::InsightsAllTime => (AllTime, "stats_insights_all_time_stats"),
        StatsViewType::InsightsLatestPostSummary => {
            (LatestPostSummary, "stats_insights_latest_post_summary")
        }
        StatsViewType::InsightsMostPopular => (MostPopular, "stats_insights_popular"),
        StatsViewType::InsightsToday => (Today, "stats_insights_today"),
        StatsViewType::Publicize => (Publicize, "stats_view_publicize"),
        StatsViewType::DetailMonthsAndYears => {
            (PostMonthsAndYears, "stats_detail_months_and_years")
        }
        StatsViewType::DetailAverageViewsPerDay => {
            (PostAverageViewsPerDay, "stats_detail_average_views_per_day")
        }
        _ => return None,
    };

    Some(InsightsEntry {
        kind,
        title: TitleRes::new(title),
    })
}

/// Every view type with the table row that serves it, in declaration order
pub fn entries() -> Vec<CatalogEntry> {
    StatsViewType::ALL
        .into_iter()
        .map(|view_type| {
            if let Some(entry) = granular_entry(view_type) {
                CatalogEntry {
                    view_type,
                    path: Some(ResolutionPath::Granular),
                    provider: Some(ProviderKey::Granular(entry.family)),
                    title: Some(entry.title),
                }
            } else if let Some(entry) = insights_entry(view_type) {
                CatalogEntry {
                    view_type,
                    path: Some(ResolutionPath::Insights),
                    provider: Some(ProviderKey::Insight(entry.kind)),
                    title: Some(entry.title),
                }
            } else {
                CatalogEntry {
                    view_type,
                    path: None,
                    provider: None,
                    title: None,
                }
            }
        })
        .collect()
}

/// SHA-256 over the catalog contents, hex encoded
pub fn catalog_fingerprint() -> String {
    let mut hasher = Sha256::new();
    hasher.update(CATALOG_VERSION.to_be_bytes());

    let mut rows: Vec<_> = entries()
        .into_iter()
        .filter_map(|entry| {
            let provider = entry.provider?;
            let title = entry.title?;
            Some(format!("{}|{}|{}", entry.view_type.name(), provider, title))
        })
        .collect();
    rows.sort();

    for row in rows {
        hasher.update(row.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint() {
        for view_type in StatsViewType::ALL {
            assert!(
                granular_entry(view_type).is_none() || insights_entry(view_type).is_none(),
                "{} is in both tables",
                view_type
            );
        }
    }

    #[test]
    fn test_shared_families() {
        let geo = granular_entry(StatsViewType::Geoviews).unwrap();
        let video = granular_entry(StatsViewType::VideoPlays).unwrap();
        assert_eq!(geo.family, GranularFamily::CountryViews);
        assert_eq!(video.family, GranularFamily::CountryViews);
        assert_ne!(geo.title, video.title);

        let posts = granular_entry(StatsViewType::TopPostsAndPages).unwrap();
        let referrers = granular_entry(StatsViewType::Referrers).unwrap();
        assert_eq!(posts.family, GranularFamily::PostsAndPages);
        assert_eq!(referrers.family, GranularFamily::PostsAndPages);
        assert_ne!(posts.title, referrers.title);
    }

    #[test]
    fn test_clicks_and_authors_have_own_families() {
        assert_eq!(
            granular_entry(StatsViewType::Clicks).unwrap().family,
            GranularFamily::Clicks
        );
        assert_eq!(
            granular_entry(StatsViewType::Authors).unwrap().family,
            GranularFamily::Authors
        );
    }

    #[test]
    fn test_every_insight_kind_is_reachable() {
        let kinds: Vec<_> = StatsViewType::ALL
            .into_iter()
            .filter_map(insights_entry)
            .map(|entry| entry.kind)
            .collect();
        for kind in InsightKind::ALL {
            assert!(kinds.contains(&kind), "{} has no view type", kind);
        }
    }

    #[test]
    fn test_entries_cover_every_view_type() {
        let entries = entries();
        assert_eq!(entries.len(), StatsViewType::ALL.len());

        let unmapped: Vec<_> = entries
            .iter()
            .filter(|e| e.path.is_none())
            .map(|e| e.view_type)
            .collect();
        assert_eq!(
            unmapped,
            vec![StatsViewType::DetailRecentWeeks, StatsViewType::AnnualSiteStats]
        );
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let first = catalog_fingerprint();
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, catalog_fingerprint());
    }
}
