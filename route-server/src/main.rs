use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use route_server::catalog::RouteCatalog;
use route_server::graph::{RouteGraph, SharedRouteGraph};
use route_server::planner::PlannerConfig;
use route_server::underground::Terminals;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Catalog location from environment
    let catalog_path = std::env::var("CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            eprintln!("Warning: CATALOG_PATH not set. Using data/routes.csv.");
            PathBuf::from("data/routes.csv")
        });

    // Search depth from environment (optional)
    let config = std::env::var("ROUTE_MAX_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(PlannerConfig::new)
        .unwrap_or_default();

    // Load the catalog and build the graph (fail fast on a bad catalog)
    println!("Loading route catalog from {}...", catalog_path.display());
    let catalog = RouteCatalog::from_path(&catalog_path).expect("Failed to load route catalog");
    let terminals = Terminals::london();
    let graph = RouteGraph::build(&catalog, &terminals);
    println!(
        "Loaded {} routes across {} stations",
        catalog.len(),
        graph.station_count()
    );

    // Build app state
    let state = AppState::new(
        SharedRouteGraph::new(graph),
        config,
        terminals,
        catalog_path,
    );

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /journey/plan    - Plan a journey between two stations");
    println!("  POST /catalog/reload  - Reload the catalog and rebuild the graph");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
