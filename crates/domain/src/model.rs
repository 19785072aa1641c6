//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of one statistics screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatsViewType {
    Followers,
    Comments,
    TagsAndCategories,
    InsightsAllTime,
    InsightsLatestPostSummary,
    InsightsMostPopular,
    InsightsToday,
    Publicize,
    TopPostsAndPages,
    Referrers,
    Clicks,
    Authors,
    Geoviews,
    SearchTerms,
    VideoPlays,
    DetailMonthsAndYears,
    DetailAverageViewsPerDay,
    DetailRecentWeeks,
    AnnualSiteStats,
}

impl StatsViewType {
    /// Every view type, in declaration order
    pub const ALL: [StatsViewType; 19] = [
        StatsViewType::Followers,
        StatsViewType::Comments,
        StatsViewType::TagsAndCategories,
        StatsViewType::InsightsAllTime,
        StatsViewType::InsightsLatestPostSummary,
        StatsViewType::InsightsMostPopular,
        StatsViewType::InsightsToday,
        StatsViewType::Publicize,
        StatsViewType::TopPostsAndPages,
        StatsViewType::Referrers,
        StatsViewType::Clicks,
        StatsViewType::Authors,
        StatsViewType::Geoviews,
        StatsViewType::SearchTerms,
        StatsViewType::VideoPlays,
        StatsViewType::DetailMonthsAndYears,
        StatsViewType::DetailAverageViewsPerDay,
        StatsViewType::DetailRecentWeeks,
        StatsViewType::AnnualSiteStats,
    ];

    /// Canonical name, as used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            StatsViewType::Followers => "FOLLOWERS",
            StatsViewType::Comments => "COMMENTS",
            StatsViewType::TagsAndCategories => "TAGS_AND_CATEGORIES",
            StatsViewType::InsightsAllTime => "INSIGHTS_ALL_TIME",
            StatsViewType::InsightsLatestPostSummary => "INSIGHTS_LATEST_POST_SUMMARY",
            StatsViewType::InsightsMostPopular => "INSIGHTS_MOST_POPULAR",
            StatsViewType::InsightsToday => "INSIGHTS_TODAY",
            StatsViewType::Publicize => "PUBLICIZE",
            StatsViewType::TopPostsAndPages => "TOP_POSTS_AND_PAGES",
            StatsViewType::Referrers => "REFERRERS",
            StatsViewType::Clicks => "CLICKS",
            StatsViewType::Authors => "AUTHORS",
            StatsViewType::Geoviews => "GEOVIEWS",
            StatsViewType::SearchTerms => "SEARCH_TERMS",
            StatsViewType::VideoPlays => "VIDEO_PLAYS",
            StatsViewType::DetailMonthsAndYears => "DETAIL_MONTHS_AND_YEARS",
            StatsViewType::DetailAverageViewsPerDay => "DETAIL_AVERAGE_VIEWS_PER_DAY",
            StatsViewType::DetailRecentWeeks => "DETAIL_RECENT_WEEKS",
            StatsViewType::AnnualSiteStats => "ANNUAL_SITE_STATS",
        }
    }
}

impl fmt::Display for StatsViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown stats view type: {0}")]
pub struct ParseViewTypeError(pub String);

impl FromStr for StatsViewType {
    type Err = ParseViewTypeError;

    /// Accepts `video-plays`, `video_plays`, `VIDEO_PLAYS` and `video plays`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        StatsViewType::ALL
            .into_iter()
            .find(|view| view.name() == normalized)
            .ok_or_else(|| ParseViewTypeError(s.to_string()))
    }
}

/// Time bucket for granular stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Days,
    Weeks,
    Months,
    Years,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Days,
        Granularity::Weeks,
        Granularity::Months,
        Granularity::Years,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Days => "days",
            Granularity::Weeks => "weeks",
            Granularity::Months => "months",
            Granularity::Years => "years",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown granularity '{0}': expected day, week, month or year")]
pub struct ParseGranularityError(pub String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Granularity::Days),
            "week" | "weeks" => Ok(Granularity::Weeks),
            "month" | "months" => Ok(Granularity::Months),
            "year" | "years" => Ok(Granularity::Years),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}

/// Stats screen section a date selector is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsSection {
    Insights,
    Days,
    Weeks,
    Months,
    Years,
}

impl StatsSection {
    /// `Insights` for ungranular views, otherwise the granularity's own section
    pub fn for_granularity(granularity: Option<Granularity>) -> Self {
        granularity.map_or(StatsSection::Insights, StatsSection::from)
    }
}

impl fmt::Display for StatsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatsSection::Insights => "insights",
            StatsSection::Days => "days",
            StatsSection::Weeks => "weeks",
            StatsSection::Months => "months",
            StatsSection::Years => "years",
        };
        f.write_str(name)
    }
}

impl From<Granularity> for StatsSection {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Days => StatsSection::Days,
            Granularity::Weeks => StatsSection::Weeks,
            Granularity::Months => StatsSection::Months,
            Granularity::Years => StatsSection::Years,
        }
    }
}

/// How a use case presents its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseMode {
    /// Compact block on the overview screen
    #[default]
    Block,
    /// Expanded list on a dedicated screen
    ViewAll,
    BlockDetail,
}

/// Handle of a localisable title string
///
/// The wrapped value is the resource key; resolving it to text is up to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TitleRes(&'static str);

impl TitleRes {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TitleRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Family of granular use case factories
///
/// Several view types may share one family and differ only by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GranularFamily {
    PostsAndPages,
    Clicks,
    Authors,
    CountryViews,
    SearchTerms,
}

impl GranularFamily {
    pub const ALL: [GranularFamily; 5] = [
        GranularFamily::PostsAndPages,
        GranularFamily::Clicks,
        GranularFamily::Authors,
        GranularFamily::CountryViews,
        GranularFamily::SearchTerms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GranularFamily::PostsAndPages => "posts_and_pages",
            GranularFamily::Clicks => "clicks",
            GranularFamily::Authors => "authors",
            GranularFamily::CountryViews => "country_views",
            GranularFamily::SearchTerms => "search_terms",
        }
    }
}

impl fmt::Display for GranularFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a pre-built insight use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Followers,
    Comments,
    TagsAndCategories,
    AllTime,
    LatestPostSummary,
    MostPopular,
    Today,
    Publicize,
    PostMonthsAndYears,
    PostAverageViewsPerDay,
}

impl InsightKind {
    pub const ALL: [InsightKind; 10] = [
        InsightKind::Followers,
        InsightKind::Comments,
        InsightKind::TagsAndCategories,
        InsightKind::AllTime,
        InsightKind::LatestPostSummary,
        InsightKind::MostPopular,
        InsightKind::Today,
        InsightKind::Publicize,
        InsightKind::PostMonthsAndYears,
        InsightKind::PostAverageViewsPerDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Followers => "followers",
            InsightKind::Comments => "comments",
            InsightKind::TagsAndCategories => "tags_and_categories",
            InsightKind::AllTime => "all_time",
            InsightKind::LatestPostSummary => "latest_post_summary",
            InsightKind::MostPopular => "most_popular",
            InsightKind::Today => "today",
            InsightKind::Publicize => "publicize",
            InsightKind::PostMonthsAndYears => "post_months_and_years",
            InsightKind::PostAverageViewsPerDay => "post_average_views_per_day",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider a catalog entry expects to find in the injected collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ProviderKey {
    Granular(GranularFamily),
    Insight(InsightKind),
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKey::Granular(family) => write!(f, "granular factory '{}'", family),
            ProviderKey::Insight(kind) => write!(f, "insight use case '{}'", kind),
        }
    }
}

/// Which resolution strategy handled (or rejected) a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    Granular,
    Insights,
}

impl ResolutionPath {
    pub fn for_granularity(granularity: Option<Granularity>) -> Self {
        if granularity.is_some() {
            ResolutionPath::Granular
        } else {
            ResolutionPath::Insights
        }
    }
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPath::Granular => f.write_str("granular"),
            ResolutionPath::Insights => f.write_str("insights"),
        }
    }
}

/// Class token for the generic view model creation protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewModelKind {
    StatsViewAll,
    StatsList,
    PostDetail,
}

impl ViewModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewModelKind::StatsViewAll => "StatsViewAllViewModel",
            ViewModelKind::StatsList => "StatsListViewModel",
            ViewModelKind::PostDetail => "PostDetailViewModel",
        }
    }
}

impl fmt::Display for ViewModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
