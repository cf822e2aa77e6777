use super::sort::Sort;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_PAGE_KEY: &str = "page";
pub const DEFAULT_PER_KEY: &str = "per";

/// Per-model pagination defaults
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    pub default_page_size: u64,
    pub max_page_size: Option<u64>,
    pub default_sorts: Vec<Sort>,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
            default_sorts: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_max_page_size(mut self, max: u64) -> Self {
        self.max_page_size = Some(max);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.default_sorts.push(sort);
        self
    }

    /// Applies the configured ceiling, if any
    pub fn clamp_page_size(&self, size: i64) -> i64 {
        match self.max_page_size {
            Some(max) if size > 0 && size as u64 > max => i64::try_from(max).unwrap_or(i64::MAX),
            _ => size,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Query-string names the request adapter reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageKeys {
    pub page: String,
    pub per: String,
}

impl PageKeys {
    pub fn new(page: impl Into<String>, per: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            per: per.into(),
        }
    }
}

impl Default for PageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_KEY, DEFAULT_PER_KEY)
    }
}
