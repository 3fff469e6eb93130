//! Pagination controls derived from the server's `PaginationState`.

use crate::model::pagination::PaginationState;

/// Number of page buttons shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// One control of the pagination bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: u32 },
    Page { number: u32, current: bool },
    Ellipsis,
    Next { target: u32 },
}

impl PageControl {
    /// Page a click on this control should fetch; `None` for controls that
    /// are not clickable (the current page and ellipses).
    pub fn target(&self) -> Option<u32> {
        match *self {
            PageControl::Previous { target } | PageControl::Next { target } => Some(target),
            PageControl::Page { number, current } => (!current).then_some(number),
            PageControl::Ellipsis => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub controls: Vec<PageControl>,
}

/// Builds the pagination bar, or `None` when there is only one page.
pub fn pagination_view(state: &PaginationState) -> Option<PaginationView> {
    if state.total_pages <= 1 {
        return None;
    }
    let total = state.total_pages;
    let current = state.current_page.clamp(1, total);
    let clamped = PaginationState {
        current_page: current,
        ..*state
    };

    let first = current.saturating_sub(WINDOW_RADIUS).max(1);
    let last = current.saturating_add(WINDOW_RADIUS).min(total);

    let mut controls = Vec::new();
    if clamped.has_previous() {
        controls.push(PageControl::Previous {
            target: current - 1,
        });
    }
    if first > 1 {
        controls.push(PageControl::Page {
            number: 1,
            current: false,
        });
        if first > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls.extend((first..=last).map(|number| PageControl::Page {
        number,
        current: number == current,
    }));
    if last < total {
        if last < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            current: false,
        });
    }
    if clamped.has_next() {
        controls.push(PageControl::Next {
            target: current + 1,
        });
    }

    Some(PaginationView {
        label: page_label(state),
        controls,
    })
}

/// "page X of Y (Z items total)" label.
pub fn page_label(state: &PaginationState) -> String {
    format!(
        "{} / {} 페이지 (총 {}개)",
        state.current_page, state.total_pages, state.total_items
    )
}
