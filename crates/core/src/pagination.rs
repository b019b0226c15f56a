//! Page-number arithmetic for the book list.
//!
//! The list view takes the raw `?page=` value straight from the query string,
//! so resolution never fails: garbage or non-positive input falls back to the
//! first page and numbers past the end clamp to the last page.

use std::num::IntErrorKind;

/// Fixed page size of the public book list.
pub const BOOKS_PER_PAGE: i64 = 6;

/// A resolved page within a result set of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number, always within `1..=num_pages`.
    pub number: i64,
    /// Total number of pages. An empty result set still has one (empty) page.
    pub num_pages: i64,
    pub per_page: i64,
    pub total: i64,
}

/// Number of pages needed for `total` items, never less than one.
pub fn num_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 1;
    }
    (total + per_page - 1) / per_page
}

/// Parse a raw page parameter. Returns `None` for anything that is not an integer.
///
/// Integers too large for `i64` saturate, so a huge page number still clamps
/// to the last page instead of being treated as garbage.
pub fn parse_page(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl PageWindow {
    /// Resolve a requested page against a result set.
    ///
    /// - missing, non-integer, zero or negative -> page 1
    /// - beyond the last page -> the last page
    pub fn resolve(requested: Option<&str>, total: i64, per_page: i64) -> Self {
        let num_pages = num_pages(total, per_page);
        let number = match parse_page(requested) {
            Some(n) if n < 1 => 1,
            Some(n) if n > num_pages => num_pages,
            Some(n) => n,
            None => 1,
        };
        Self {
            number,
            num_pages,
            per_page,
            total: total.max(0),
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_number(&self) -> Option<i64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_number(&self) -> Option<i64> {
        self.has_next().then(|| self.number + 1)
    }

    /// 1-based index of the first item on the page, or 0 for an empty result set.
    pub fn start_index(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based index of the last item on the page.
    pub fn end_index(&self) -> i64 {
        (self.offset() + self.per_page).min(self.total)
    }
}
