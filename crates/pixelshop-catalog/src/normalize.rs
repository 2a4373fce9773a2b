//! Normalization from raw catalog records to [`pixelshop_core::Product`].
//!
//! This is the decode boundary the rest of the system trusts: every product
//! that leaves here is fully typed, with `in_stock` derived
//! deterministically. Nothing downstream ever looks at a raw record.

use pixelshop_core::{Product, Rating};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::CatalogError;
use crate::types::{Category, RemoteCategory, RemoteProduct, RemoteRating};

/// Stock quantities at or below this count as out of stock: the storefront
/// treats nearly-depleted inventory as unavailable rather than overselling.
const IN_STOCK_FLOOR: i64 = 5;

/// Normalizes a raw [`RemoteProduct`] into a [`Product`].
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the price is not a finite
/// number — such a record cannot be filtered or sorted and poisons the
/// whole snapshot (loads are all-or-nothing).
pub fn normalize_product(product: RemoteProduct) -> Result<Product, CatalogError> {
    // from_f64 (not the retain variant) so 12.99 stays 12.99 instead of
    // dragging the float's full binary expansion into every comparison.
    let price = Decimal::from_f64(product.price).ok_or_else(|| CatalogError::Normalization {
        product_id: product.id,
        reason: format!("price {} is not a finite number", product.price),
    })?;

    let in_stock = derive_in_stock(product.id, product.stock);

    // Treat empty strings as absent.
    let description = product.description.filter(|s| !s.is_empty());
    let image = product.thumbnail.filter(|s| !s.is_empty());
    let brand = product.brand.filter(|s| !s.is_empty());

    Ok(Product {
        id: product.id,
        title: product.title,
        price,
        description,
        category: product.category.unwrap_or_default(),
        brand,
        image,
        rating: normalize_rating(product.rating),
        in_stock,
    })
}

/// Derives the availability flag.
///
/// When the source reports a stock quantity, availability is
/// `stock > IN_STOCK_FLOOR`. When it doesn't, a rule keyed on the stable
/// product id decides, so repeated loads of the same catalog always agree —
/// roughly two out of three untracked products read as available.
fn derive_in_stock(id: i64, stock: Option<i64>) -> bool {
    match stock {
        Some(stock) => stock > IN_STOCK_FLOOR,
        None => id.rem_euclid(3) != 0,
    }
}

fn normalize_rating(rating: Option<RemoteRating>) -> Rating {
    match rating {
        Some(RemoteRating::Score(rate)) => Rating { rate, count: None },
        Some(RemoteRating::Detailed { rate, count }) => Rating { rate, count },
        None => Rating::default(),
    }
}

/// Normalizes a raw category entry. The legacy bare-slug form has no
/// display name, so the slug doubles as one.
#[must_use]
pub fn normalize_category(category: RemoteCategory) -> Category {
    match category {
        RemoteCategory::Full { slug, name, .. } => Category { slug, name },
        RemoteCategory::Slug(slug) => Category {
            name: slug.clone(),
            slug,
        },
    }
}
