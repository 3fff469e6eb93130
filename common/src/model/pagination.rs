use serde::{Deserialize, Serialize};

/// Server-authoritative paging descriptor returned with every report page.
///
/// The client only displays it and requests other pages; it never derives
/// page counts on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub items_per_page: u32,
    #[serde(default)]
    pub total_items: u64,
}

impl PaginationState {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
