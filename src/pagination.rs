//! This modules defines the common functionality for paging data.

/// The number of rows shown on each page of the transaction table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    /// Five rows per page.
    #[default]
    Five,
    /// Ten rows per page.
    Ten,
    /// Fifteen rows per page.
    Fifteen,
}

impl PageSize {
    /// All page sizes in the order they are offered to the user.
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Fifteen];

    /// The number of rows per page.
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Fifteen => 15,
        }
    }

    /// Get the page size for `rows`, or `None` if it is not one of the presets.
    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == rows)
    }
}

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page size to use when not specified in a request.
    pub default_page_size: PageSize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::Five,
        }
    }
}

/// The number of pages needed to show `item_count` items with
/// `rows_per_page` items on each page.
///
/// There is always at least one page, even if it is empty.
pub fn page_count(item_count: usize, rows_per_page: usize) -> usize {
    item_count.div_ceil(rows_per_page.max(1)).max(1)
}

/// Get the items on the 0-based page `page_index`.
///
/// Returns an empty slice for pages past the end.
pub fn page_slice<T>(items: &[T], page_index: usize, rows_per_page: usize) -> &[T] {
    let rows_per_page = rows_per_page.max(1);
    let start = page_index.saturating_mul(rows_per_page);

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(rows_per_page).min(items.len());

    &items[start..end]
}

/// The page navigation buttons below a table.
///
/// Each target is a 0-based page index, or `None` if that button is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    /// The 0-based index of the current page.
    pub page_index: usize,
    /// The total number of pages.
    pub page_count: usize,
    /// Jump to the first page.
    pub first: Option<usize>,
    /// Go back one page.
    pub previous: Option<usize>,
    /// Go forward one page.
    pub next: Option<usize>,
    /// Jump to the last page.
    pub last: Option<usize>,
}

impl PaginationControls {
    /// The text shown between the buttons, e.g. "Page 1 of 3".
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index.saturating_add(1), self.page_count)
    }
}

/// Work out which page buttons are enabled and where they lead.
pub fn create_pagination_controls(page_index: usize, page_count: usize) -> PaginationControls {
    let last_page = page_count.saturating_sub(1);
    let can_go_back = page_index > 0;
    let can_go_forward = page_index < last_page;

    PaginationControls {
        page_index,
        page_count,
        first: can_go_back.then_some(0),
        // Stepping back from past the end lands on the last real page.
        previous: can_go_back.then(|| (page_index - 1).min(last_page)),
        next: can_go_forward.then_some(page_index + 1),
        last: can_go_forward.then_some(last_page),
    }
}
