//! Fixed-size pagination of a (sorted) item view.

use serde::Serialize;

/// Rows per grid page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a view. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Slice out `page` (1-based). Out-of-range pages clamp to the nearest valid
/// one; an empty view is a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page_count = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        page_count,
        total: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_is_one_empty_page() {
        let page = paginate::<u32>(&[], 3, DEFAULT_PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn splits_and_clamps() {
        let rows: Vec<u32> = (1..=25).collect();

        let first = paginate(&rows, 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.page_count, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(&rows, 99, 10);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);

        let zeroth = paginate(&rows, 0, 10);
        assert_eq!(zeroth.page, 1);
    }
}
