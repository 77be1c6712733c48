//! Pagination controls
//!
//! Which page buttons are enabled and where each one leads.

/// One of the four page buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

/// Page label and button state for `page` of `total_pages`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub page: u32,
    pub total_pages: u32,
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

impl PaginationControls {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            first_disabled: page <= 1,
            prev_disabled: page <= 1,
            next_disabled: page >= total_pages,
            last_disabled: page >= total_pages,
        }
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.page, self.total_pages)
    }

    pub fn is_disabled(&self, control: PageControl) -> bool {
        match control {
            PageControl::First => self.first_disabled,
            PageControl::Previous => self.prev_disabled,
            PageControl::Next => self.next_disabled,
            PageControl::Last => self.last_disabled,
        }
    }
}

impl Default for PaginationControls {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Page a button leads to from `page` of `total_pages`
pub fn target_page(control: PageControl, page: u32, total_pages: u32) -> u32 {
    let total_pages = total_pages.max(1);
    match control {
        PageControl::First => 1,
        PageControl::Previous => page.saturating_sub(1).max(1),
        PageControl::Next => (page + 1).min(total_pages),
        PageControl::Last => total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_for_every_page() {
        for total in 1..=5 {
            for page in 1..=total {
                let controls = PaginationControls::new(page, total);
                assert_eq!(controls.label(), format!("{} / {}", page, total));
                assert_eq!(controls.first_disabled, page == 1);
                assert_eq!(controls.prev_disabled, page == 1);
                assert_eq!(controls.next_disabled, page == total);
                assert_eq!(controls.last_disabled, page == total);
            }
        }
    }

    #[test]
    fn test_target_page_stays_in_range() {
        assert_eq!(target_page(PageControl::Previous, 1, 4), 1);
        assert_eq!(target_page(PageControl::Previous, 3, 4), 2);
        assert_eq!(target_page(PageControl::Next, 4, 4), 4);
        assert_eq!(target_page(PageControl::Next, 2, 4), 3);
        assert_eq!(target_page(PageControl::Last, 2, 4), 4);
        assert_eq!(target_page(PageControl::First, 3, 4), 1);
        assert_eq!(target_page(PageControl::Last, 1, 0), 1);
    }
}
