//! The navigable location: the query state's one and only storage.

use std::sync::{Arc, Mutex};

use pixelshop_core::{decode, encode_query_string, parse_query_string, ParamMap, QueryState};

#[derive(Debug, Default)]
struct LocationState {
    params: ParamMap,
    /// Bumped on every navigation; gives tests and logs a commit sequence
    /// number.
    generation: u64,
}

/// A cloneable handle to the current navigable location.
///
/// Holds the flat parameter map a view is addressed by. The controller, the
/// filter binder, and the binder's timer task all share one handle;
/// navigation replaces the map wholesale (never a partial mutation), so the
/// engine can only ever observe a fully committed state.
#[derive(Debug, Clone, Default)]
pub struct SharedLocation {
    inner: Arc<Mutex<LocationState>>,
}

impl SharedLocation {
    /// A location with no parameters: the default view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a location from a shared or reloaded query string.
    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        let location = Self::new();
        location.navigate(parse_query_string(raw));
        location
    }

    /// A snapshot of the current parameter map.
    #[must_use]
    pub fn params(&self) -> ParamMap {
        self.lock().params.clone()
    }

    /// The current view as a shareable query string.
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_query_string(&self.lock().params)
    }

    /// Decodes the current parameters into a [`QueryState`]. Recomputed on
    /// every call — the location IS the query state's storage.
    #[must_use]
    pub fn query_state(&self) -> QueryState {
        decode(&self.lock().params)
    }

    /// How many navigations have happened on this location.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Replaces the location wholesale with `params` and returns the new
    /// generation.
    pub fn navigate(&self, params: ParamMap) -> u64 {
        let mut state = self.lock();
        state.params = params;
        state.generation += 1;
        tracing::debug!(generation = state.generation, "location rewritten");
        state.generation
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LocationState> {
        self.inner.lock().expect("location mutex poisoned")
    }
}
