//! Query-string helpers for profile routes.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Query key selecting the active profile-layout tab.
pub const TAB_QUERY_KEY: &str = "tab";

/// Parse `?tab=`; absent, negative, fractional, or non-numeric values yield 0.
#[must_use]
pub fn parse_tab(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Build `path?tab=N` for profile navigation links.
#[must_use]
pub fn with_tab(path: &str, tab: u32) -> String {
    format!("{path}?{TAB_QUERY_KEY}={tab}")
}
