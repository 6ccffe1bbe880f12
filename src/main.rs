use worker_faceid::api::server;

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run_server().await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    server::init_tracing();

    let config = worker_faceid::config::AppConfig::from_env();
    let app = server::create_app(server::build_state(&config).await);

    // Run with lambda_web adapter
    lambda_web::run(app).await
}
