mod routes;

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DATA_PATH: &str = "data/IBASProduction2022.csv";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the dataset once, before the socket is bound. A missing or
    // unreadable file means the process never becomes ready.
    let data_path =
        std::env::var("PRODUCTION_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let records = match parser::load_production_file(&data_path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load production data: {}", e);
            std::process::exit(1);
        }
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes(records))
        .layer(cors);

    // Start server
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .unwrap_or_else(|e| panic!("Invalid BIND_ADDR '{}': {}", bind_addr, e));
    tracing::info!("Starting daily-production service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
