/// Compute the page size with precedence: global flag -> configured page size.
#[must_use]
pub fn effective_limit(global: Option<u32>, items_per_page: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(items_per_page).max(1)
}

/// Slice out 1-based `page` of `items` with `per_page` entries per page.
///
/// Pages past the end are empty. Page 0 is treated as page 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    let per_page = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);
    let skip = usize::try_from(page.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);
    items.into_iter().skip(skip).take(per_page).collect()
}

/// Number of pages needed for `total` items.
#[must_use]
pub fn page_count(total: usize, per_page: u32) -> usize {
    let per_page = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);
    total.div_ceil(per_page)
}
