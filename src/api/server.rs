use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handler::authenticate_worker_handler;
use crate::clients::{DynamoWorkerDirectory, RekognitionFaceIndex, S3ObjectStore};
use crate::config::AppConfig;
use crate::identity::Authenticator;

/// Shared handler dependencies, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            // JSON format for CloudWatch
            fmt::layer().json().with_target(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

/// Construct the collaborator clients and wire them into the identity flow.
pub async fn build_state(config: &AppConfig) -> AppState {
    let aws = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let authenticator = Authenticator::new(
        Arc::new(S3ObjectStore::new(&aws)),
        Arc::new(RekognitionFaceIndex::new(&aws)),
        Arc::new(DynamoWorkerDirectory::new(
            &aws,
            config.workers_table.clone(),
        )),
        config.auth_bucket.clone(),
        config.face_collection.clone(),
    );

    AppState {
        authenticator: Arc::new(authenticator),
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Worker authentication endpoint
        .route("/auth", get(authenticate_worker_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state)
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting worker face identity server");

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let config = AppConfig::from_env();
    let app = create_app(build_state(&config).await);

    let port = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
