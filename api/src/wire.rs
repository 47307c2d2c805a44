/// balldontlie raw wire types: serde shapes for the list envelopes.
/// Records inside `data` deserialize straight into the domain types in lib.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// List envelope  (v1 API)
// ---------------------------------------------------------------------------

/// `{ "data": [...], "meta": {...} }` as returned by `/teams` and `/games`.
#[derive(Debug, Deserialize, Clone)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
    pub meta: Option<Meta>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { data: Vec::new(), meta: None }
    }
}

/// Pagination counters. Only logged; additional pages are never requested.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Meta {
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub next_page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_count: Option<u32>,
}

impl Meta {
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}
