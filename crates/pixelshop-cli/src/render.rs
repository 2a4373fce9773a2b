//! Plain-text rendering of query results for the terminal.

use std::io::Write;

use pixelshop_core::{PageItem, QueryResult, QueryState};
use pixelshop_session::TitleSink;

/// Sets the terminal window title via the OSC 0 escape sequence.
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&self, title: &str) {
        print!("\x1b]0;{title}\x07");
        let _ = std::io::stdout().flush();
    }
}

/// Renders one result page: a summary line, the product rows, and the
/// pagination strip.
#[must_use]
pub fn render_page(query: &QueryState, result: &QueryResult, window: &[PageItem]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Showing {} of {} products\n",
        result.products.len(),
        result.total_matches
    ));

    if result.products.is_empty() {
        out.push_str("No products found matching your criteria.\n");
    } else {
        for product in &result.products {
            let stock = if product.in_stock { "in stock" } else { "out of stock" };
            out.push_str(&format!(
                "{:>6}  {:<44} {:>10}  {:<12}  {}\n",
                product.id, product.title, product.price, stock, product.category
            ));
        }
    }

    let strip = render_window(query.page, window);
    if !strip.is_empty() {
        out.push_str(&format!("pages: {strip}\n"));
    }
    out
}

/// Renders the pagination strip with the current page bracketed, e.g.
/// `[1] 2 … 10`.
#[must_use]
pub fn render_window(current_page: u32, window: &[PageItem]) -> String {
    let slots: Vec<String> = window
        .iter()
        .map(|item| match item {
            PageItem::Page(p) if *p == current_page => format!("[{p}]"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();
    slots.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelshop_core::{pagination_window, Product, Rating};

    fn make_product(id: i64, title: &str, in_stock: bool) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: "19.99".parse().expect("test price"),
            description: None,
            category: "beauty".to_string(),
            brand: None,
            image: None,
            rating: Rating::default(),
            in_stock,
        }
    }

    #[test]
    fn render_window_brackets_the_current_page() {
        let window = pagination_window(5, 10);
        assert_eq!(render_window(5, &window), "1 … 4 [5] 6 … 10");
    }

    #[test]
    fn render_window_is_empty_for_a_single_page() {
        assert_eq!(render_window(1, &pagination_window(1, 1)), "");
    }

    #[test]
    fn render_page_summarizes_and_lists_rows() {
        let result = QueryResult {
            products: vec![make_product(1, "Lipstick", true)],
            total_matches: 13,
            total_pages: 2,
        };
        let query = QueryState::default();
        let window = pagination_window(query.page, 2);
        let text = render_page(&query, &result, &window);

        assert!(text.starts_with("Showing 1 of 13 products\n"));
        assert!(text.contains("Lipstick"));
        assert!(text.contains("in stock"));
        assert!(text.contains("pages: [1] 2"));
    }

    #[test]
    fn render_page_reports_an_empty_result() {
        let result = QueryResult {
            products: Vec::new(),
            total_matches: 0,
            total_pages: 0,
        };
        let query = QueryState::default();
        let text = render_page(&query, &result, &[]);

        assert!(text.contains("No products found matching your criteria."));
        assert!(!text.contains("pages:"));
    }

    #[test]
    fn render_page_marks_out_of_stock_rows() {
        let result = QueryResult {
            products: vec![make_product(2, "Mascara", false)],
            total_matches: 1,
            total_pages: 1,
        };
        let text = render_page(&QueryState::default(), &result, &[]);
        assert!(text.contains("out of stock"));
    }
}
