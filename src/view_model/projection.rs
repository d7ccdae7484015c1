//! Derived projections of a [`ViewState`].
//!
//! Nothing here is cached: every accessor recomputes from `collection`, `search_term`
//! and `current_page`, so a snapshot can never disagree with itself.

use serde::Serialize;

use super::ViewState;
use crate::models::User;

/// Case-insensitive match of `term` against name, email and role.
pub fn matches_term(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&user.name, &user.email, &user.role]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Number of pages needed for `len` items; 0 when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Half-open `[start, end)` bounds of `page` within `len` items.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(len);
    let end = (start + page_size).min(len);
    (start, end)
}

/// What the pagination controls render. Absent when there is at most one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_count: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// "Showing 5-8 of 10" style summary.
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start_index + 1,
            self.end_index,
            self.items_count
        )
    }
}

impl ViewState {
    /// Users matching the search term, in collection order.
    pub fn filtered(&self) -> Vec<&User> {
        self.collection
            .iter()
            .filter(|user| matches_term(user, &self.search_term))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn start_index(&self) -> usize {
        page_bounds(self.current_page, self.page_size, self.filtered().len()).0
    }

    pub fn end_index(&self) -> usize {
        page_bounds(self.current_page, self.page_size, self.filtered().len()).1
    }

    /// The slice of `filtered()` shown on the current page.
    pub fn page_items(&self) -> Vec<&User> {
        let filtered = self.filtered();
        let (start, end) = page_bounds(self.current_page, self.page_size, filtered.len());
        filtered[start..end].to_vec()
    }

    pub fn pagination(&self) -> Option<PaginationInfo> {
        let items_count = self.filtered().len();
        let total_pages = total_pages(items_count, self.page_size);
        if total_pages <= 1 {
            return None;
        }
        let (start_index, end_index) = page_bounds(self.current_page, self.page_size, items_count);
        Some(PaginationInfo {
            current_page: self.current_page,
            total_pages,
            items_count,
            start_index,
            end_index,
            has_previous: self.current_page > 1,
            has_next: self.current_page < total_pages,
        })
    }

    /// Pull `current_page` back onto the last non-empty page, or page 1.
    pub(super) fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        if self.current_page > last {
            self.current_page = last;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }
}
