pub mod api;
pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build artifacts
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, quiet the HTTP stack
                "info,hyper=warn,reqwest=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request timing middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        tracing::info!(
            "{:>5}ms | {} {:>6} {}",
            duration.as_millis(),
            response.status().as_u16(),
            method,
            uri.path()
        );

        response
    }

    // Load configuration (config.toml next to the executable, embedded
    // default otherwise)
    let config = shared::config::initialize()?;

    // Record store: install the HTTP source, then poll full snapshots.
    // The first listener tick fires immediately and performs the initial
    // load.
    let source = Arc::new(shared::store::HttpStoreClient::new(&config.store.base_url));
    shared::store::snapshot::initialize(source)?;
    shared::store::snapshot::spawn_listener(config.store.poll_interval_secs);

    // Scheduled sync trigger, if configured
    api::handlers::u501_manual_sync::initialize_schedule();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 FINANCE OVERVIEW DASHBOARD
        // ========================================
        .route(
            "/api/d400/finance-overview",
            get(api::handlers::d400_finance_overview::get_finance_overview),
        )
        .route(
            "/api/d400/pnl",
            get(api::handlers::d400_finance_overview::get_pnl),
        )
        // ========================================
        // DOMAIN RECORD LISTINGS
        // ========================================
        .route(
            "/api/accounts",
            get(api::handlers::a001_seller_account::list_all),
        )
        .route("/api/orders", get(api::handlers::a002_order::list_orders))
        .route(
            "/api/orders/status-counts",
            get(api::handlers::a002_order::get_status_counts),
        )
        .route(
            "/api/orders/:id",
            get(api::handlers::a002_order::get_order_detail),
        )
        .route(
            "/api/inventory",
            get(api::handlers::a003_inventory_item::list),
        )
        .route(
            "/api/inventory/status-counts",
            get(api::handlers::a003_inventory_item::get_status_counts),
        )
        .route(
            "/api/shipments",
            get(api::handlers::a004_shipment::list_shipments),
        )
        .route(
            "/api/shipments/stats",
            get(api::handlers::a004_shipment::get_stats),
        )
        .route(
            "/api/shipments/:id",
            get(api::handlers::a004_shipment::get_shipment_detail),
        )
        // ========================================
        // UseCase u501: Manual sync trigger
        // ========================================
        .route(
            "/api/u501/sync/start",
            post(api::handlers::u501_manual_sync::start_sync),
        )
        .route(
            "/api/u501/sync/status",
            get(api::handlers::u501_manual_sync::get_status),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
