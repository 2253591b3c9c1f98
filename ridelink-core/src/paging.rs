use serde::{Deserialize, Serialize};

/// Server pagination parameters: `page` is 0-based, `size` is the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Page 0 of a fresh filter.
    pub fn first(size: u32) -> Self {
        Self { page: 0, size }
    }

    /// size = 1 doubles as a count query: total_pages equals total rows.
    pub fn count_probe() -> Self {
        Self { page: 0, size: 1 }
    }
}

/// One fetched page. Produced fresh on every server fetch and replaced,
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            content: Vec::new(),
            page: request.page,
            size: request.size,
            total_pages: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_probe_uses_size_one() {
        let probe = PageRequest::count_probe();
        assert_eq!(probe.page, 0);
        assert_eq!(probe.size, 1);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<u32> = Page::empty(PageRequest::first(10));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
