//! # Pagination
//!
//! Fixed-size, one-based pages over an ordered sequence.

use crate::framework::FrameworkError;
use serde::{Deserialize, Serialize};

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// A validated request for one page of results.
///
/// Both `page` and `page_size` are at least 1. Construct with [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Validates and builds a page request.
    ///
    /// # Errors
    /// [`FrameworkError::InvalidPage`] when `page` or `page_size` is zero.
    pub fn new(page: u32, page_size: u32) -> Result<Self, FrameworkError> {
        if page == 0 {
            return Err(FrameworkError::InvalidPage("page must be at least 1".into()));
        }
        if page_size == 0 {
            return Err(FrameworkError::InvalidPage(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the paging totals the caller needs to render navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    /// Slices `items` to the requested page, preserving order.
    ///
    /// `total_pages` is `ceil(len / page_size)`, so an empty input has zero pages.
    /// A page past the end yields no items.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let size = request.page_size as usize;
        let total_pages = total.div_ceil(size) as u32;
        let items = items
            .into_iter()
            .skip(request.offset())
            .take(size)
            .collect();
        Self {
            items,
            total_pages,
            current_page: request.page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_page_and_zero_size() {
        assert!(matches!(
            PageRequest::new(0, 8),
            Err(FrameworkError::InvalidPage(_))
        ));
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(FrameworkError::InvalidPage(_))
        ));
    }

    #[test]
    fn slices_pages_in_order() {
        let items: Vec<u32> = (1..=12).collect();

        let first = Page::slice(items.clone(), PageRequest::new(1, 8).unwrap());
        assert_eq!(first.items, (1..=8).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.current_page, 1);

        let second = Page::slice(items, PageRequest::new(2, 8).unwrap());
        assert_eq!(second.items, vec![9, 10, 11, 12]);
        assert_eq!(second.total_pages, 2);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = Page::slice(vec![1, 2, 3], PageRequest::new(5, 2).unwrap());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 5);
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let page = Page::<u32>::slice(Vec::new(), PageRequest::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn serializes_with_camel_case_totals() {
        let page = Page::slice((1..=12).collect::<Vec<u32>>(), PageRequest::new(2, 8).unwrap());
        let value = toml::Value::try_from(&page).unwrap();

        let items: Vec<i64> = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(toml::Value::as_integer)
            .collect();
        assert_eq!(items, vec![9, 10, 11, 12]);
        assert_eq!(value["totalPages"].as_integer(), Some(2));
        assert_eq!(value["currentPage"].as_integer(), Some(2));
        assert!(value.get("total_pages").is_none());

        let back: Page<u32> = toml::from_str(&toml::to_string(&page).unwrap()).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = Page::slice(vec![1, 2, 3], PageRequest::new(u32::MAX, u32::MAX).unwrap());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
