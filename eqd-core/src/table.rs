//! The table's active query and page.

use crate::paginate::{Page, PageCursor};

/// Query and page for the paged table.
///
/// The page goes back to 1 whenever the filtered set can change: a
/// different query, or a new record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    query: String,
    cursor: PageCursor,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            cursor: PageCursor::new(page_size),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.cursor.page
    }

    /// Switch to `query`. Returns `false`, leaving the page alone, when it is
    /// the query already applied.
    pub fn apply_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.cursor.reset();
        true
    }

    /// The record set was replaced by a new ingestion.
    pub fn records_replaced(&mut self) {
        self.cursor.reset();
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.cursor.go_to(page, total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.cursor.next(total_pages);
    }

    pub fn prev(&mut self, total_pages: usize) {
        self.cursor.prev(total_pages);
    }

    /// The current page of `filtered`.
    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> Page<'a, T> {
        self.cursor.slice(filtered)
    }
}
