//! Catalog browse categories.
//!
//! Sessions store the category string exactly as the client sent it; the
//! enum exists to map stored values onto upstream endpoints. Unknown
//! values degrade to [`Category::Popular`] at fetch time instead of being
//! rejected at write time, so a session row never becomes unreadable.

/// A browse category on the upstream movie catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
    TrendingDay,
    TrendingWeek,
}

/// Category assigned to newly created sessions.
pub const DEFAULT_CATEGORY: &str = "popular";

impl Category {
    /// Canonical string form, as stored on session rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
            Category::TrendingDay => "trending_day",
            Category::TrendingWeek => "trending_week",
        }
    }

    /// Upstream API path for this category.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Category::Popular => "/movie/popular",
            Category::TopRated => "/movie/top_rated",
            Category::NowPlaying => "/movie/now_playing",
            Category::Upcoming => "/movie/upcoming",
            Category::TrendingDay => "/trending/movie/day",
            Category::TrendingWeek => "/trending/movie/week",
        }
    }

    /// Interpret a stored category value, falling back to `Popular` for
    /// anything unrecognized.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "popular" => Category::Popular,
            "top_rated" => Category::TopRated,
            "now_playing" => Category::NowPlaying,
            "upcoming" => Category::Upcoming,
            "trending_day" => Category::TrendingDay,
            "trending_week" => Category::TrendingWeek,
            _ => Category::Popular,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Popular
    }
}
