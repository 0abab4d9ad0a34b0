//! Pagination metadata

use serde::{Deserialize, Serialize};

/// Page info the backend attaches to every paginated listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub first_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub total_records: u64,
}

impl PageMetadata {
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > self.first_page.max(1)
    }
}
