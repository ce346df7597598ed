use std::{net::SocketAddr, process::ExitCode, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salesboard::{
    AppState, DEFAULT_MONTH, DashboardConfig, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for the sales dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the sales API, e.g. "http://127.0.0.1:5000".
    #[arg(long, env = "SALESBOARD_API_URL")]
    api_url: String,

    /// The address to serve the dashboard from.
    #[arg(long, env = "SALESBOARD_HOST", default_value = "127.0.0.1")]
    host: std::net::IpAddr,

    /// The port to serve the dashboard from.
    #[arg(short, long, env = "SALESBOARD_PORT", default_value_t = 3000)]
    port: u16,

    /// The month shown when the dashboard is opened, as a two-digit code.
    #[arg(long, env = "SALESBOARD_DEFAULT_MONTH", default_value = DEFAULT_MONTH)]
    default_month: String,

    /// The number of transactions per page. Uses the sales API's default if not set.
    #[arg(long, env = "SALESBOARD_PAGE_SIZE")]
    page_size: Option<u64>,

    /// How many seconds to wait for the sales API.
    #[arg(long, env = "SALESBOARD_REQUEST_TIMEOUT", default_value_t = 10)]
    request_timeout: u64,

    /// Load and show the items-per-category chart.
    #[arg(long, env = "SALESBOARD_CATEGORY_CHART")]
    category_chart: bool,

    /// The number of page views whose event requests are kept in order.
    #[arg(long, env = "SALESBOARD_MAX_TRACKED_VIEWS", default_value_t = 1024)]
    max_tracked_views: usize,
}

impl From<Args> for DashboardConfig {
    fn from(args: Args) -> Self {
        Self {
            api_url: args.api_url,
            default_month: args.default_month,
            page_size: args.page_size,
            request_timeout: Duration::from_secs(args.request_timeout),
            category_chart: args.category_chart,
            max_tracked_views: args.max_tracked_views,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    let addr = SocketAddr::from((args.host, args.port));

    let state = match AppState::from_config(args.into()) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Reading sales data from {}", state.config.api_url);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
