//! Query-state synchronization for pixelshop.
//!
//! Keeps three parties in agreement: the navigable [`SharedLocation`] (the
//! query state's only storage), the transient text buffers a user is still
//! typing into, and the query engine's view of the world. Commits flow one
//! way — input → buffer → (debounced or immediate) location rewrite →
//! re-decode → re-evaluate — so the engine always observes the most
//! recently committed edit.

mod binder;
mod controller;
mod location;
mod title;

pub use binder::FilterBinder;
pub use controller::{BrowseController, FilterSelection};
pub use location::SharedLocation;
pub use title::{SectionTitle, TitleSink, SITE_TITLE};
