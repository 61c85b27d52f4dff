/// Date format used for assistant submission dates: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display value for any metric the catalog has no data for
pub(crate) const PLACEHOLDER: &str = "--";

/// Size of the "recent" head in curated mode
pub(crate) const RECENT_COUNT: usize = 8;
pub(crate) const COMPACT_RECENT_COUNT: usize = 4;

/// Rows rendered before the "N more" line
pub(crate) const SEARCH_INITIAL_WINDOW: usize = 24;
pub(crate) const OVERFLOW_INITIAL_WINDOW: usize = 12;

/// Provider whose rows carry the official badge instead of the API key badge
pub(crate) const OFFICIAL_PROVIDER: &str = "lobehub";

pub(crate) const ASSISTANT_PATH: &str = "/discover/assistant";
pub(crate) const PROVIDER_PATH: &str = "/discover/provider";
pub(crate) const PROVIDER_DOC_URL: &str = "https://lobehub.com/docs/usage/providers";

/// Fixed CNY/USD rate used to show CNY-priced models in dollars
pub(crate) const CNY_TO_USD: f64 = 7.14;
