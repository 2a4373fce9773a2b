//! The load-once catalog snapshot.

use chrono::{DateTime, Utc};
use pixelshop_core::Product;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::normalize::normalize_product;

/// Outcome of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load attempted yet.
    #[default]
    Idle,
    /// Snapshot is populated and immutable.
    Ready,
    /// The load failed; the store stays in this state for the rest of the
    /// mount. No automatic retry.
    Failed(LoadFailure),
}

/// The two user-visible failure categories. Consumers treat them
/// identically (an error banner); the split exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Transport-level failure reaching the source.
    Fetch,
    /// The source answered but the payload could not be decoded into
    /// typed products.
    Decode,
}

/// A recorded load failure, suitable for an error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadErrorKind,
    pub message: String,
}

/// Holds the full product list fetched once per mount and exposes it as an
/// immutable snapshot to the query engine.
///
/// All-or-nothing: a failed fetch or a single undecodable record leaves the
/// snapshot empty — a partial catalog would silently change filter counts
/// and pagination between runs.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    state: LoadState,
    fetched_at: Option<DateTime<Utc>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already [`LoadState::Ready`] with the given
    /// snapshot. For fixtures and offline use; no fetch will ever run and
    /// `fetched_at` stays `None`.
    #[must_use]
    pub fn preloaded(products: Vec<Product>) -> Self {
        Self {
            products,
            state: LoadState::Ready,
            fetched_at: None,
        }
    }

    /// Runs the one-shot load. At most one fetch is attempted per store:
    /// once the state is [`LoadState::Ready`] or [`LoadState::Failed`],
    /// repeat calls return the recorded outcome without touching the
    /// network.
    pub async fn load(&mut self, client: &CatalogClient, source_url: &str) -> &LoadState {
        if self.state != LoadState::Idle {
            return &self.state;
        }

        match fetch_normalized(client, source_url).await {
            Ok(products) => {
                tracing::info!(count = products.len(), source_url, "catalog loaded");
                self.products = products;
                self.fetched_at = Some(Utc::now());
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, source_url, "catalog load failed");
                self.state = LoadState::Failed(LoadFailure {
                    kind: classify(&err),
                    message: err.to_string(),
                });
            }
        }
        &self.state
    }

    /// The immutable snapshot. Empty until a load succeeds.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// The recorded failure, if the load failed.
    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        match &self.state {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// When the snapshot was taken. `None` until a load succeeds.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

async fn fetch_normalized(
    client: &CatalogClient,
    source_url: &str,
) -> Result<Vec<Product>, CatalogError> {
    let raw = client.fetch_catalog(source_url).await?;
    raw.into_iter().map(normalize_product).collect()
}

/// Buckets a load error into its user-visible kind.
fn classify(err: &CatalogError) -> LoadErrorKind {
    match err {
        CatalogError::Deserialize { .. } | CatalogError::Normalization { .. } => {
            LoadErrorKind::Decode
        }
        _ => LoadErrorKind::Fetch,
    }
}
