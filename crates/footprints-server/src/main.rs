//! Footprints Server Binary
//!
//! Runs the Footprints HTTP service.

use std::env;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use footprints_auth::{JwtVerifier, TokenVerifier};
use footprints_server::{
    create_router, AppState, CommentOwnership, FootprintStore, MemoryStore, ServiceConfig,
};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("FOOTPRINTS_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let port: u16 = env::var("FOOTPRINTS_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("FOOTPRINTS_PORT must be a valid port number");

    let secret = env::var("FOOTPRINTS_JWT_SECRET").expect("FOOTPRINTS_JWT_SECRET must be set");

    let comment_ownership: CommentOwnership = env::var("FOOTPRINTS_COMMENT_OWNERSHIP")
        .unwrap_or_else(|_| "open".into())
        .parse()
        .expect("FOOTPRINTS_COMMENT_OWNERSHIP must be 'open' or 'enforced'");

    // Wire the capabilities
    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtVerifier::new(&secret));
    let store: Arc<dyn FootprintStore> = Arc::new(MemoryStore::new());
    let config = ServiceConfig { comment_ownership };

    info!(
        port = port,
        verifier = verifier.description(),
        comment_ownership = ?config.comment_ownership,
        "Starting Footprints server"
    );

    // Create application state
    let state = Arc::new(AppState {
        verifier,
        store,
        config,
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "Footprints server listening");

    axum::serve(listener, app).await.expect("Server error");
}
