//! Page slicing and the paginated result envelope.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// One page of results plus the metadata needed to request the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Elements of the requested page, in upstream order
    #[serde(rename = "elementos")]
    pub elements: Vec<T>,
    #[serde(rename = "paginaActual")]
    pub page: usize,
    #[serde(rename = "totalPaginas")]
    pub total_pages: usize,
    /// Count after filtering, before slicing
    #[serde(rename = "totalElementos")]
    pub total_elements: usize,
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Number of pages needed for `total` items; zero items means zero pages.
pub fn total_pages(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Half-open `[start, end)` window of `page`, clamped to `total`.
pub fn page_window(total: usize, page: usize, page_size: NonZeroUsize) -> (usize, usize) {
    let start = page.saturating_mul(page_size.get()).min(total);
    let end = start.saturating_add(page_size.get()).min(total);
    (start, end)
}

/// Cut `items` down to the requested page.
///
/// A page past the end yields an empty slice, never an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: NonZeroUsize) -> PagedResult<T> {
    let total_elements = items.len();
    let (start, end) = page_window(total_elements, page, page_size);

    let elements: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    PagedResult {
        elements,
        page,
        total_pages: total_pages(total_elements, page_size),
        total_elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(10)), 0);
        assert_eq!(total_pages(1, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(3, size(1)), 3);
    }

    #[test]
    fn test_first_and_last_page() {
        let items: Vec<u32> = (1..=7).collect();

        let first = paginate(items.clone(), 0, size(3));
        assert_eq!(first.elements, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_elements, 7);

        let last = paginate(items, 2, size(3));
        assert_eq!(last.elements, vec![7]);
        assert_eq!(last.page, 2);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let result = paginate(vec!['a', 'b'], 5, size(2));

        assert!(result.is_empty());
        assert_eq!(result.page, 5);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_elements, 2);
    }

    #[test]
    fn test_window_never_exceeds_total() {
        assert_eq!(page_window(5, 0, size(10)), (0, 5));
        assert_eq!(page_window(5, 1, size(10)), (5, 5));
        assert_eq!(page_window(5, usize::MAX, size(usize::MAX)), (5, 5));
    }

    #[test]
    fn test_empty_input() {
        let result = paginate(Vec::<u8>::new(), 0, size(10));

        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.total_elements, 0);
    }

    #[test]
    fn test_serializes_with_catalog_keys() {
        let value = serde_json::to_value(paginate(vec![1, 2, 3], 0, size(2))).unwrap();

        assert_eq!(value["elementos"], serde_json::json!([1, 2]));
        assert_eq!(value["paginaActual"], 0);
        assert_eq!(value["totalPaginas"], 2);
        assert_eq!(value["totalElementos"], 3);
    }
}
