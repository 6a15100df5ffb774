//! Page slicing with 1-based page numbers

use serde::Serialize;

/// Rows per page of the equipment table
pub const EQUIPMENT_PAGE_SIZE: usize = 10;
/// Rows per page of the direction statistics table
pub const DIRECTION_STATS_PAGE_SIZE: usize = 5;

/// One page of a list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the whole list
    pub total: usize,
    /// Requested page (1-based)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// `ceil(total / page_size)`, with a page size of 0 counted as 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice `records` to the requested page. Out-of-range pages come back
/// empty rather than failing.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = records.len();

    let items = match page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
        Some(start) if start < total => {
            let end = (start + page_size).min(total);
            records[start..end].to_vec()
        }
        _ => Vec::new(),
    };

    Page {
        items,
        total,
        page,
        page_size,
        total_pages: total_pages(total, page_size),
    }
}

/// Keep a page number inside `1..=max(total_pages, 1)`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page reached by a "next" control
pub fn next_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_add(1), total_pages)
}

/// Page reached by a "previous" control
pub fn prev_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_sub(1), total_pages)
}
