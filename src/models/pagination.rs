use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageParams {
    pub fn new(page: Option<usize>, page_size: Option<usize>) -> Self {
        Self { page, page_size }
    }

    pub fn get_page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn get_offset(&self) -> usize {
        (self.get_page() - 1) * self.get_page_size()
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Returns the 1-indexed `page` of `items`. Pages past the end yield an empty
/// slice rather than an error.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let params = PageParams::new(Some(page), Some(page_size));
    let start = params.get_offset();
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + params.get_page_size()).min(items.len());
    items[start..end].to_vec()
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params() {
        let params = PageParams::new(Some(2), Some(10));
        assert_eq!(params.get_page(), 2);
        assert_eq!(params.get_page_size(), 10);
        assert_eq!(params.get_offset(), 10);
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::new(None, None);
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.get_offset(), 0);
    }

    #[test]
    fn test_pages_reconstruct_list() {
        let items: Vec<i32> = (0..23).collect();
        let page_size = 10;
        let mut rebuilt = Vec::new();
        for page in 1..=total_pages(items.len(), page_size) {
            rebuilt.extend(page_slice(&items, page, page_size));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<i32> = (0..23).collect();
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice(&items, 99, 10).is_empty());
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<i32> = (0..23).collect();
        assert_eq!(page_slice(&items, 3, 10), vec![20, 21, 22]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }
}
