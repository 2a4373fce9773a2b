mod render;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixelshop_catalog::{normalize_category, CatalogClient, CatalogStore, LoadState};
use pixelshop_core::{
    AppConfig, ParamMap, KEY_CATEGORY, KEY_IN_STOCK, KEY_LIMIT, KEY_MAX_PRICE, KEY_MIN_PRICE,
    KEY_PAGE, KEY_SEARCH, KEY_SORT_FIELD, KEY_SORT_ORDER,
};
use pixelshop_session::{BrowseController, SectionTitle, SharedLocation};

#[derive(Debug, Parser)]
#[command(name = "pixelshop-cli")]
#[command(about = "Pixel Shop catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog and print one filtered, sorted page of it.
    Browse(BrowseArgs),
    /// List the source's product categories.
    Categories,
}

#[derive(Debug, Args)]
struct BrowseArgs {
    /// A shareable query string, e.g. "search=phone&sortOrder=desc&page=2".
    /// Individual flags below override its keys.
    #[arg(long)]
    query: Option<String>,

    /// Case-insensitive substring match against product titles.
    #[arg(long)]
    search: Option<String>,

    /// Category slug to filter on.
    #[arg(long)]
    category: Option<String>,

    /// Inclusive lower price bound.
    #[arg(long)]
    min_price: Option<String>,

    /// Inclusive upper price bound.
    #[arg(long)]
    max_price: Option<String>,

    /// true = in stock only, false = out of stock only.
    #[arg(long)]
    in_stock: Option<bool>,

    /// Sort field: title or price.
    #[arg(long)]
    sort_field: Option<String>,

    /// Sort order: asc or desc.
    #[arg(long)]
    sort_order: Option<String>,

    /// 1-based page number.
    #[arg(long)]
    page: Option<u32>,

    /// Page size.
    #[arg(long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pixelshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = CatalogClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse(args) => browse(&config, &client, &args).await,
        Commands::Categories => categories(&config, &client).await,
    }
}

async fn browse(config: &AppConfig, client: &CatalogClient, args: &BrowseArgs) -> anyhow::Result<()> {
    let title = render::TerminalTitle;
    let _section = SectionTitle::enter(&title, "Products");

    let location = SharedLocation::from_query_string(args.query.as_deref().unwrap_or(""));
    overlay_flags(&location, args);

    let mut controller = BrowseController::new(
        CatalogStore::new(),
        location,
        Duration::from_millis(config.debounce_quiet_ms),
    );

    if let LoadState::Failed(failure) = controller.load(client, &config.source_url).await {
        anyhow::bail!("catalog load failed: {}", failure.message);
    }
    tracing::info!(
        count = controller.store().products().len(),
        "catalog ready"
    );

    let query = controller.query_state();
    let result = controller.result();
    let window = controller.pagination_window();
    print!("{}", render::render_page(&query, &result, &window));

    let shareable = controller.location().query_string();
    if !shareable.is_empty() {
        println!("view: ?{shareable}");
    }
    Ok(())
}

async fn categories(config: &AppConfig, client: &CatalogClient) -> anyhow::Result<()> {
    let raw = client.fetch_categories(&config.source_url).await?;
    for category in raw.into_iter().map(normalize_category) {
        println!("{:<28} {}", category.slug, category.name);
    }
    Ok(())
}

/// Layers the individual flags over the raw query string. Values go in as
/// strings so they take the same tolerant decode path a reloaded location
/// would.
fn overlay_flags(location: &SharedLocation, args: &BrowseArgs) {
    let mut params = location.params();
    overlay(&mut params, KEY_SEARCH, args.search.as_deref());
    overlay(&mut params, KEY_CATEGORY, args.category.as_deref());
    overlay(&mut params, KEY_MIN_PRICE, args.min_price.as_deref());
    overlay(&mut params, KEY_MAX_PRICE, args.max_price.as_deref());
    overlay(
        &mut params,
        KEY_IN_STOCK,
        args.in_stock.map(|b| b.to_string()).as_deref(),
    );
    overlay(&mut params, KEY_SORT_FIELD, args.sort_field.as_deref());
    overlay(&mut params, KEY_SORT_ORDER, args.sort_order.as_deref());
    overlay(
        &mut params,
        KEY_PAGE,
        args.page.map(|p| p.to_string()).as_deref(),
    );
    overlay(
        &mut params,
        KEY_LIMIT,
        args.limit.map(|l| l.to_string()).as_deref(),
    );
    if params != location.params() {
        location.navigate(params);
    }
}

fn overlay(params: &mut ParamMap, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelshop_core::{SortOrder, DEFAULT_LIMIT};

    fn bare_args() -> BrowseArgs {
        BrowseArgs {
            query: None,
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            in_stock: None,
            sort_field: None,
            sort_order: None,
            page: None,
            limit: None,
        }
    }

    #[test]
    fn overlay_flags_override_query_string_keys() {
        let location = SharedLocation::from_query_string("search=tv&page=3");
        let args = BrowseArgs {
            search: Some("radio".to_string()),
            sort_order: Some("desc".to_string()),
            ..bare_args()
        };
        overlay_flags(&location, &args);

        let query = location.query_state();
        assert_eq!(query.search.as_deref(), Some("radio"));
        assert_eq!(query.page, 3, "unrelated query-string keys survive");
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn overlay_flags_without_flags_leaves_the_location_untouched() {
        let location = SharedLocation::from_query_string("search=tv");
        let generation = location.generation();
        overlay_flags(&location, &bare_args());
        assert_eq!(location.generation(), generation);
    }

    #[test]
    fn numeric_flags_take_the_tolerant_decode_path() {
        let location = SharedLocation::new();
        let args = BrowseArgs {
            min_price: Some("not-a-price".to_string()),
            limit: Some(24),
            ..bare_args()
        };
        overlay_flags(&location, &args);

        let query = location.query_state();
        assert_eq!(query.min_price, None, "malformed bound reads as absent");
        assert_eq!(query.limit, 24);
        assert_ne!(query.limit, DEFAULT_LIMIT);
    }
}
