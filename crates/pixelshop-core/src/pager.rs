//! Pagination window math: which page buttons to show for a result set.

/// One slot in the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Computes the bounded, ellipsis-compressed strip of page numbers for the
/// current view.
///
/// With one page or fewer there is nothing to navigate and the window is
/// empty (controls are hidden entirely). Otherwise the window always
/// includes page 1, the last page, and every page within one step of
/// `current_page`. A run of two or more hidden pages collapses to a single
/// [`PageItem::Ellipsis`] per side; a run of exactly one page shows that
/// page number — an ellipsis standing in for one page would be longer than
/// the number it hides.
#[must_use]
pub fn pagination_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let shown = (1..=total_pages)
        .filter(|&p| p == 1 || p == total_pages || p.abs_diff(current_page) <= 1);

    let mut window = Vec::new();
    let mut prev: Option<u32> = None;
    for page in shown {
        if let Some(prev) = prev {
            match page - prev - 1 {
                0 => {}
                1 => window.push(PageItem::Page(prev + 1)),
                _ => window.push(PageItem::Ellipsis),
            }
        }
        window.push(PageItem::Page(page));
        prev = Some(page);
    }
    window
}
