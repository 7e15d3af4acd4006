/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number, always within `1..=page_count()`
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Zero-based position of the first item within the full result set
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `total` items; an empty set still has one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Cut `items` down to the requested page, clamping out-of-range pages
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page = page.clamp(1, page_count(total, page_size));
    let offset = (page - 1) * page_size;

    let items = items.into_iter().skip(offset).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total,
    }
}
