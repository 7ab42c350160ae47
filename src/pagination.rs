//! This modules defines the common functionality for paging data.

/// The number of questions shown on each page.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum number of items on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

/// The number of pages needed to show `item_count` items, i.e. `ceil(item_count / page_size)`.
///
/// Zero items need zero pages.
pub fn page_count(item_count: u64, page_size: u64) -> u64 {
    item_count.div_ceil(page_size)
}

/// Take the items for the 1-based `page` out of `items`.
///
/// The page covers the items at offsets `page_size * (page - 1)` up to
/// `page_size * page - 1`, clipped to the end of `items`. A page past the end
/// is empty. Callers must not pass a `page` of zero.
pub fn paginate<T>(items: Vec<T>, page: u64, page_size: u64) -> Vec<T> {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);

    items.into_iter().skip(offset).take(page_size).collect()
}
