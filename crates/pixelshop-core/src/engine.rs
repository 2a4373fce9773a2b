//! The pure query engine: `(catalog, query) -> page of results`.
//!
//! Safe to call on every render. Filtering, sorting, and slicing all happen
//! in one pass over an immutable catalog snapshot; nothing here allocates
//! beyond the result page itself and the filtered index.

use std::cmp::Ordering;

use crate::product::Product;
use crate::query::{QueryState, SortField, SortOrder};

/// One evaluated page of the catalog plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The page slice, in final sorted order.
    pub products: Vec<Product>,
    /// Match count after filtering, before pagination.
    pub total_matches: usize,
    /// `ceil(total_matches / limit)`; `0` when nothing matches.
    pub total_pages: usize,
}

/// Evaluates `query` against a full catalog snapshot.
///
/// Deterministic and side-effect free. All active predicates are
/// AND-combined; an absent filter field imposes no constraint. The sort is
/// stable, so products with equal sort keys keep their catalog order
/// regardless of direction — pagination windows must be reproducible across
/// re-renders with identical inputs.
///
/// Degenerate numeric inputs are accepted as given rather than rejected:
/// inverted price bounds match nothing, `limit == 0` yields an empty slice
/// with zero pages, and a `page` past the end yields an empty slice. The
/// decode step owns validation; the engine never errors.
#[must_use]
pub fn evaluate(catalog: &[Product], query: &QueryState) -> QueryResult {
    let search = query.search.as_deref().map(str::to_lowercase);
    let category = query.category.as_deref().map(str::to_lowercase);

    let mut matched: Vec<&Product> = catalog
        .iter()
        .filter(|product| passes_filters(product, search.as_deref(), category.as_deref(), query))
        .collect();

    matched.sort_by(|a, b| {
        let ordering = match query.sort_field {
            SortField::Title => fold_cmp(&a.title, &b.title),
            SortField::Price => a.price.cmp(&b.price),
        };
        match query.sort_order {
            SortOrder::Asc => ordering,
            // Reversing the comparator (not the slice) keeps ties in
            // catalog order.
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total_matches = matched.len();
    if query.limit == 0 {
        return QueryResult {
            products: Vec::new(),
            total_matches,
            total_pages: 0,
        };
    }

    let limit = query.limit as usize;
    let total_pages = total_matches.div_ceil(limit);
    let start = (query.page as usize)
        .saturating_sub(1)
        .saturating_mul(limit)
        .min(total_matches);
    let end = start.saturating_add(limit).min(total_matches);

    QueryResult {
        products: matched[start..end].iter().map(|p| (*p).clone()).collect(),
        total_matches,
        total_pages,
    }
}

/// Case-folded lexicographic comparison for title sorting.
///
/// Folds through Unicode lowercasing so `"apple"` and `"Apple"` interleave
/// the way a person expects instead of by codepoint.
fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn passes_filters(
    product: &Product,
    search: Option<&str>,
    category: Option<&str>,
    query: &QueryState,
) -> bool {
    if let Some(needle) = search {
        if !product.title.to_lowercase().contains(needle) {
            return false;
        }
    }
    if let Some(category) = category {
        if product.category.to_lowercase() != category {
            return false;
        }
    }
    if let Some(min) = query.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = query.max_price {
        if product.price > max {
            return false;
        }
    }
    if let Some(in_stock) = query.in_stock {
        if product.in_stock != in_stock {
            return false;
        }
    }
    true
}
