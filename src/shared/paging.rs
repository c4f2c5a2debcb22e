//! Paging parameters for list/search operations.

/// A validated `startFrom`/`pageSize` pair, ready to be sent as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub start_from: u32,
    pub page_size: u32,
}

impl Paging {
    /// Clamp a requested page to the configured maximum.
    ///
    /// A `page_size` of 0 asks for as many results as allowed. A
    /// `max_page_size` of 0 disables the upper bound.
    pub fn clamp(start_from: u32, page_size: u32, max_page_size: u32) -> Self {
        let page_size = if max_page_size == 0 {
            page_size
        } else if page_size == 0 || page_size > max_page_size {
            max_page_size
        } else {
            page_size
        };

        Self {
            start_from,
            page_size,
        }
    }

    pub fn to_query(&self) -> String {
        format!("startFrom={}&pageSize={}", self.start_from, self.page_size)
    }
}
