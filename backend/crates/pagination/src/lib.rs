//! Offset pagination primitives shared by list endpoints.
//!
//! Raw `page`/`per_page` query values are normalised once, at the edge:
//! missing or unparsable values fall back to the defaults and out-of-range
//! values are clamped rather than rejected. Handlers then carry a
//! [`PageRequest`] through the store call and build the `{meta, data}`
//! response envelope from it.

use serde::{Deserialize, Serialize};

/// Page number used when the query omits or mangles `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the query omits or mangles `per_page`.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Upper bound applied to `per_page`.
pub const MAX_PER_PAGE: i64 = 100;

/// A normalised pagination request.
///
/// Construction guarantees `page >= 1` and `1 <= per_page <= MAX_PER_PAGE`,
/// so downstream code never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    /// Build a request from already-numeric values, clamping them into range.
    #[must_use]
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build a request from raw query strings.
    ///
    /// A missing value takes its default individually; an unparsable value
    /// resets both to the defaults, matching the single parse step the
    /// endpoints expose. The result is then clamped as for [`Self::new`].
    #[must_use]
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parsed = (
            parse_with_default(page, DEFAULT_PAGE),
            parse_with_default(per_page, DEFAULT_PER_PAGE),
        );
        match parsed {
            (Some(page), Some(per_page)) => Self::new(page, per_page),
            _ => Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE),
        }
    }

    /// Requested page number (always `>= 1`).
    #[must_use]
    pub const fn page(self) -> i64 {
        self.page
    }

    /// Requested page size (always in `[1, MAX_PER_PAGE]`).
    #[must_use]
    pub const fn per_page(self) -> i64 {
        self.per_page
    }

    /// Number of rows to skip for this page.
    ///
    /// Saturates at `i64::MAX` so an absurd `page` still yields an empty
    /// slice instead of an arithmetic overflow.
    #[must_use]
    pub const fn offset(self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Maximum number of rows on this page.
    #[must_use]
    pub const fn limit(self) -> i64 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

fn parse_with_default(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw {
        None => Some(default),
        Some(value) => value.parse().ok(),
    }
}

/// Pagination metadata echoed back to clients alongside the page slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page number the slice was taken from.
    pub page: i64,
    /// Page size the slice was limited to.
    pub per_page: i64,
    /// Total number of pages at this page size (`ceil(total_items / per_page)`).
    pub total_pages: i64,
    /// Total number of items in the collection.
    pub total_items: i64,
}

impl PageMeta {
    /// Derive metadata for a request against a collection of `total_items`.
    #[must_use]
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        // Ceiling division; per_page >= 1 by construction.
        let per_page = request.per_page();
        Self {
            page: request.page(),
            per_page,
            total_pages: (total_items + per_page - 1) / per_page,
            total_items,
        }
    }
}

/// Response envelope for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Pagination metadata for the slice.
    pub meta: PageMeta,
    /// The page slice itself.
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap a page slice with its metadata.
    #[must_use]
    pub fn new(meta: PageMeta, data: Vec<T>) -> Self {
        Self { meta, data }
    }
}
