//! Remote catalog access for pixelshop.
//!
//! One logical fetch per UI mount: the client pulls the source's entire
//! product collection in a single request, the normalize boundary turns the
//! tolerant raw records into fully-typed [`pixelshop_core::Product`]s, and
//! the [`CatalogStore`] holds the resulting read-only snapshot together
//! with the load outcome. No server-side filtering, sorting, or paging is
//! ever requested — the query engine works on the complete catalog.

mod client;
mod error;
mod normalize;
mod retry;
mod store;
mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_category, normalize_product};
pub use store::{CatalogStore, LoadErrorKind, LoadFailure, LoadState};
pub use types::{CatalogResponse, Category, RemoteCategory, RemoteProduct, RemoteRating};
