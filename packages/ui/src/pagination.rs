use dioxus::prelude::*;

/// Most page buttons shown at once.
const WINDOW: usize = 5;

/// Client-side paging over an already fetched list. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    pub total: usize,
    pub per_page: usize,
    pub current: usize,
}

impl Paginator {
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
            current: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page.max(1))
    }

    /// Out-of-range pages are ignored.
    pub fn go_to(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current = page;
        }
    }

    /// Update `total` and pull `current` back inside the new page count.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.current = self.current.clamp(1, self.total_pages().max(1));
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// `[start, end)` indices of the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.current.max(1) - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// 1-based `(first, last, total)` for the "Showing a to b of n" line.
    pub fn showing(&self) -> (usize, usize, usize) {
        let range = self.range();
        if range.is_empty() {
            (0, 0, self.total)
        } else {
            (range.start + 1, range.end, self.total)
        }
    }

    /// Page numbers to render as buttons.
    pub fn window(&self) -> Vec<usize> {
        let pages = self.total_pages();
        if pages <= WINDOW {
            return (1..=pages).collect();
        }
        let half = WINDOW / 2;
        let start = if self.current <= half + 1 {
            1
        } else if self.current + half >= pages {
            pages - WINDOW + 1
        } else {
            self.current - half
        };
        (start..start + WINDOW).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }
}

/// Previous / numbered / next buttons under a table.
#[component]
pub fn Pagination(pager: Signal<Paginator>) -> Element {
    let state = pager();
    let (first, last, total) = state.showing();
    let current = state.current;

    rsx! {
        div { class: "pagination",
            span { class: "pagination-info", "Showing {first} to {last} of {total} entries" }
            if state.total_pages() > 1 {
                div { class: "pagination-buttons",
                    button {
                        class: "page-btn",
                        disabled: !state.has_prev(),
                        onclick: move |_| pager.write().go_to(current.saturating_sub(1)),
                        "Previous"
                    }
                    for page in state.window() {
                        button {
                            key: "{page}",
                            class: if page == current { "page-btn active" } else { "page-btn" },
                            onclick: move |_| pager.write().go_to(page),
                            "{page}"
                        }
                    }
                    button {
                        class: "page-btn",
                        disabled: !state.has_next(),
                        onclick: move |_| pager.write().go_to(current + 1),
                        "Next"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Paginator::new(0, 10).total_pages(), 0);
        assert_eq!(Paginator::new(10, 10).total_pages(), 1);
        assert_eq!(Paginator::new(11, 10).total_pages(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut pager = Paginator::new(25, 10);
        pager.go_to(3);
        assert_eq!(pager.current, 3);
        pager.go_to(4);
        pager.go_to(0);
        assert_eq!(pager.current, 3);
        assert_eq!(pager.range(), 20..25);
        assert_eq!(pager.showing(), (21, 25, 25));
    }

    #[test]
    fn shrinking_list_clamps_current_page() {
        let mut pager = Paginator::new(50, 10);
        pager.go_to(5);
        pager.set_total(12);
        assert_eq!(pager.current, 2);
        pager.set_total(0);
        assert_eq!(pager.current, 1);
        assert_eq!(pager.showing(), (0, 0, 0));
    }

    #[test]
    fn window_slides() {
        let mut pager = Paginator::new(100, 10);
        assert_eq!(pager.window(), vec![1, 2, 3, 4, 5]);
        pager.go_to(6);
        assert_eq!(pager.window(), vec![4, 5, 6, 7, 8]);
        pager.go_to(9);
        assert_eq!(pager.window(), vec![6, 7, 8, 9, 10]);
        pager.go_to(3);
        assert_eq!(pager.window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Paginator::new(30, 10).window(), vec![1, 2, 3]);
    }

    #[test]
    fn slice_matches_range() {
        let items: Vec<u32> = (0..23).collect();
        let mut pager = Paginator::new(items.len(), 10);
        pager.go_to(3);
        assert_eq!(pager.slice(&items), &[20, 21, 22]);
        assert!(!pager.has_next());
        assert!(pager.has_prev());
    }
}
