// Pagination contract for event listing
//
// PageRequest normalizes whatever the transport hands us; EventPage is the
// wire shape of one page of results. The normalization policy is deliberately
// lenient: malformed page/limit values fall back to defaults instead of
// erroring (InvalidInput is absorbed here, never surfaced).

use serde::{Deserialize, Serialize};

use crate::Event;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Default number of events per page when the caller does not say otherwise
pub const DEFAULT_PAGE_SIZE: i64 = 6;

/// Sentinel category value meaning "no filter"
const ALL_CATEGORIES: &str = "all";

/// A normalized page request
///
/// Invariants: `page >= 1`, `limit >= 1`. `category` is `None` when no
/// filter applies (absent or the "all" sentinel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub category: Option<String>,
}

impl PageRequest {
    /// Build a request from raw query-string values.
    ///
    /// Non-numeric, missing, or non-positive `page` normalizes to 1.
    /// Non-numeric, missing, or non-positive `limit` normalizes to
    /// `default_limit`. There is no upper cap on `limit`.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        category: Option<&str>,
        default_limit: i64,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit).unwrap_or(default_limit);
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_string);
        Self {
            page,
            limit,
            category,
        }
    }

    /// Number of rows to skip for this page
    ///
    /// Saturates instead of overflowing: page and limit are only bounded by
    /// what parses as an i64, and a saturated skip still lands past the end.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}

/// One page of events plus the totals the UI paginates with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub events: Vec<Event>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl EventPage {
    pub fn new(events: Vec<Event>, total: i64, request: &PageRequest) -> Self {
        Self {
            events,
            total,
            page: request.page,
            total_pages: page_count(total, request.limit),
        }
    }
}

/// `ceil(total / limit)`, 0 when the result set is empty
pub fn page_count(total: i64, limit: i64) -> i64 {
    debug_assert!(limit >= 1);
    // `i64::div_ceil` is unstable (int_roundings); counts are non-negative
    (total as u64).div_ceil(limit as u64) as i64
}
