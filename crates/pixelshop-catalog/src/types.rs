//! Raw catalog-source response types.
//!
//! ## Observed payload shapes
//!
//! ### Rating
//! Sources disagree: the demo catalog sends a bare scalar (`"rating": 4.56`)
//! while older storefront APIs send an object (`"rating": {"rate": 3.9,
//! "count": 120}`). [`RemoteRating`] is `#[serde(untagged)]` to accept both;
//! normalization flattens them into one type.
//!
//! ### Stock
//! A plain integer quantity when present. Some sources omit it entirely and
//! carry no availability flag at all, so `in_stock` is always derived during
//! normalization — never read from the payload.
//!
//! ### Categories endpoint
//! Historically returned a bare array of slug strings; current sources
//! return `{slug, name, url}` objects. [`RemoteCategory`] accepts both.
//!
//! ### Paging metadata
//! The collection response carries `total`/`skip`/`limit` echo fields. They
//! describe server-side paging, which this system never uses (the fetch
//! asks for everything), so they are decoded and ignored.

use serde::Deserialize;

/// Top-level response from the catalog collection endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<RemoteProduct>,

    /// Server-side paging echo; decoded and ignored.
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A single product exactly as the source sends it.
#[derive(Debug, Deserialize)]
pub struct RemoteProduct {
    /// Source numeric product ID.
    pub id: i64,

    /// Display name.
    pub title: String,

    /// Price as a JSON number. Converted to `Decimal` at the normalize
    /// boundary; non-finite values are rejected there.
    pub price: f64,

    /// Plain-text description. May be absent or empty.
    #[serde(default)]
    pub description: Option<String>,

    /// Category slug, e.g. `"smartphones"`. May be absent on sparse
    /// sources.
    #[serde(default)]
    pub category: Option<String>,

    /// Thumbnail URL. May be absent or empty.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Brand name. Not all records carry one.
    #[serde(default)]
    pub brand: Option<String>,

    /// Rating signal in either observed shape. May be absent.
    #[serde(default)]
    pub rating: Option<RemoteRating>,

    /// Stock quantity. Absent on sources that don't track inventory.
    #[serde(default)]
    pub stock: Option<i64>,
}

/// The two rating shapes seen in the wild.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RemoteRating {
    /// Bare 0–5 scalar.
    Score(f64),
    /// `{rate, count}` object with review volume.
    Detailed {
        rate: f64,
        #[serde(default)]
        count: Option<u64>,
    },
}

/// A category entry in either observed shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RemoteCategory {
    /// `{slug, name, url}` object form.
    Full {
        slug: String,
        name: String,
        #[serde(default)]
        url: Option<String>,
    },
    /// Legacy bare slug string.
    Slug(String),
}

/// A normalized category for filter UIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub slug: String,
    pub name: String,
}
