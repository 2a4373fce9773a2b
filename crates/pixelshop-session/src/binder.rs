//! The debounced filter binder.
//!
//! Typing is fast; rewriting the location (and re-running the engine and
//! re-rendering everything downstream) is comparatively expensive. The
//! binder holds the uncommitted text of the search and price inputs and
//! commits them in one location rewrite after a quiet period.
//!
//! The three text fields deliberately share ONE timer: an edit to any of
//! them reschedules the single pending commit, and the commit that finally
//! fires carries all three buffers. Immediate commit paths (stock,
//! category, sort, page) are independent and never touch this timer.

use std::time::Duration;

use tokio::task::JoinHandle;

use pixelshop_core::{KEY_MAX_PRICE, KEY_MIN_PRICE, KEY_PAGE, KEY_SEARCH};

use crate::location::SharedLocation;

/// The uncommitted text of the debounced filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TextBuffers {
    search: String,
    min_price: String,
    max_price: String,
}

/// Reconciles keystrokes with location rewrites.
///
/// Each edit replaces the previous pending commit (aborting its timer)
/// rather than queueing behind it, so at most one commit fires per quiet
/// period and it always carries the latest buffer values. The fired commit
/// layers the staged text over the location's then-current parameters, so
/// an immediate commit (stock, sort, category) that landed during the
/// quiet period survives.
#[derive(Debug)]
pub struct FilterBinder {
    location: SharedLocation,
    quiet_period: Duration,
    buffers: TextBuffers,
    pending: Option<JoinHandle<()>>,
}

impl FilterBinder {
    /// Creates a binder whose buffers are seeded from the location's
    /// currently committed values — reopening a shared view shows the
    /// filters that produced it.
    #[must_use]
    pub fn new(location: SharedLocation, quiet_period: Duration) -> Self {
        let params = location.params();
        let buffers = TextBuffers {
            search: params.get(KEY_SEARCH).cloned().unwrap_or_default(),
            min_price: params.get(KEY_MIN_PRICE).cloned().unwrap_or_default(),
            max_price: params.get(KEY_MAX_PRICE).cloned().unwrap_or_default(),
        };
        Self {
            location,
            quiet_period,
            buffers,
            pending: None,
        }
    }

    /// Records a keystroke in the search box and restarts the quiet period.
    pub fn edit_search(&mut self, value: &str) {
        value.clone_into(&mut self.buffers.search);
        self.schedule();
    }

    /// Records a keystroke in the minimum-price box and restarts the quiet
    /// period.
    pub fn edit_min_price(&mut self, value: &str) {
        value.clone_into(&mut self.buffers.min_price);
        self.schedule();
    }

    /// Records a keystroke in the maximum-price box and restarts the quiet
    /// period.
    pub fn edit_max_price(&mut self, value: &str) {
        value.clone_into(&mut self.buffers.max_price);
        self.schedule();
    }

    /// Empties the buffers and discards any pending commit. Used by
    /// clear-filters, which commits the cleared state itself.
    pub fn reset(&mut self) {
        self.buffers = TextBuffers::default();
        self.cancel_pending();
    }

    /// `true` while a commit is scheduled but has not fired.
    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn schedule(&mut self) {
        // The previous pending commit is superseded, never queued.
        self.cancel_pending();

        let location = self.location.clone();
        let staged = self.buffers.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            commit_staged(&location, &staged);
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for FilterBinder {
    fn drop(&mut self) {
        // A commit must not land after the view that asked for it is gone.
        self.cancel_pending();
    }
}

fn commit_staged(location: &SharedLocation, staged: &TextBuffers) {
    let mut params = location.params();
    // Committing a filter change always returns the user to the first page.
    params.remove(KEY_PAGE);
    set_or_remove(&mut params, KEY_SEARCH, &staged.search);
    set_or_remove(&mut params, KEY_MIN_PRICE, &staged.min_price);
    set_or_remove(&mut params, KEY_MAX_PRICE, &staged.max_price);
    let generation = location.navigate(params);
    tracing::debug!(generation, "debounced filter commit");
}

/// Cleared fields are omitted from the location, never written as empty
/// tokens.
fn set_or_remove(params: &mut pixelshop_core::ParamMap, key: &str, value: &str) {
    if value.is_empty() {
        params.remove(key);
    } else {
        params.insert(key.to_string(), value.to_string());
    }
}
