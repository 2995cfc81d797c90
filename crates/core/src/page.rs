//! Page-based listing envelope.

use serde::Serialize;

/// Items per page for every paginated listing.
pub const PER_PAGE: i64 = 10;

/// A one-based page request.
///
/// Out-of-range input (absent, zero, negative) clamps to page 1, matching the
/// framework behavior the API contract was taken from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * PER_PAGE
    }

    pub fn limit(&self) -> i64 {
        PER_PAGE
    }
}

/// Page envelope: items plus page/total metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub current_page: i64,
    pub data: Vec<T>,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: i64) -> Self {
        // An empty listing still reports one (empty) page.
        let last_page = (total + PER_PAGE - 1).div_euclid(PER_PAGE).max(1);
        Self {
            current_page: request.page(),
            data,
            per_page: PER_PAGE,
            total,
            last_page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        }
    }
}
