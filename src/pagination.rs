use serde::Serialize;

/// Number of page links shown at once.
pub const WINDOW_SIZE: usize = 10;

/// Pages shown before the window starts sliding with the current page.
const LEADING_PAGES: usize = 6;
/// Pages shown left of the current page once the window slides.
const LEFT_OF_CURRENT: usize = 5;
/// Pages shown right of the current page once the window slides.
const RIGHT_OF_CURRENT: usize = 4;

/// Page links and navigation affordances around the current page.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub start_page: usize,
    pub end_page: usize,
    pub total_pages: usize,
    pub visible_pages: Vec<usize>,
    pub show_first_jump: bool,
    pub show_last_jump: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl PageWindow {
    /// Window without links, used while the total is unknown or zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_pages.is_empty()
    }

    /// Target of the "previous" control, if enabled.
    pub fn previous_page(&self, current_page: usize) -> Option<usize> {
        self.can_go_prev.then(|| current_page - 1)
    }

    /// Target of the "next" control, if enabled.
    pub fn next_page(&self, current_page: usize) -> Option<usize> {
        self.can_go_next.then(|| current_page.saturating_add(1))
    }
}

fn window_bounds(current_page: usize, total_pages: usize) -> (usize, usize) {
    if current_page <= LEADING_PAGES {
        (1, total_pages.min(WINDOW_SIZE))
    } else if current_page.saturating_add(RIGHT_OF_CURRENT) >= total_pages {
        let start = total_pages.saturating_sub(WINDOW_SIZE - 1).max(1);
        (start, total_pages)
    } else {
        (
            current_page - LEFT_OF_CURRENT,
            current_page + RIGHT_OF_CURRENT,
        )
    }
}

/// Computes the visible page window.
///
/// An unknown total, a zero total or a zero page size yields an empty window
/// with both navigation controls disabled. The "previous" control is enabled
/// whenever the current page is right of the window's first link.
pub fn compute_window(
    current_page: usize,
    total_items: Option<usize>,
    page_size: usize,
) -> PageWindow {
    let Some(total_items) = total_items else {
        return PageWindow::empty();
    };
    if page_size == 0 {
        return PageWindow::empty();
    }

    let total_pages = total_items.div_ceil(page_size);
    if total_pages == 0 {
        return PageWindow::empty();
    }

    let (start_page, end_page) = window_bounds(current_page, total_pages);

    PageWindow {
        start_page,
        end_page,
        total_pages,
        visible_pages: (start_page..=end_page).collect(),
        show_first_jump: start_page > 1,
        show_last_jump: end_page < total_pages,
        can_go_prev: current_page > start_page,
        can_go_next: current_page < total_pages,
    }
}
