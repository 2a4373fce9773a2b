//! Domain types and pure query logic for the pixelshop catalog browser.
//!
//! Everything in this crate is synchronous and side-effect free: the product
//! model, the query value object decoded from the navigable location, the
//! engine that turns a catalog snapshot plus a query into a page of results,
//! and the pagination window math. The async edges (fetching, debouncing)
//! live in `pixelshop-catalog` and `pixelshop-session`.

mod app_config;
mod config;
mod engine;
mod pager;
mod params;
mod product;
mod query;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use engine::{evaluate, QueryResult};
pub use pager::{pagination_window, PageItem};
pub use params::{
    decode, encode, encode_query_string, parse_query_string, ParamMap, KEY_CATEGORY, KEY_IN_STOCK,
    KEY_LIMIT, KEY_MAX_PRICE, KEY_MIN_PRICE, KEY_PAGE, KEY_SEARCH, KEY_SORT_FIELD, KEY_SORT_ORDER,
};
pub use product::{Product, Rating};
pub use query::{QueryState, SortField, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE};
