//! Registrar entry point.
//!
//! Deployed, this runs on the storage object-created trigger (feature
//! `lambda`). Locally it takes the notification JSON from a file argument or
//! stdin, which is how the enrollment flow is exercised against real
//! collaborators without the trigger in front of it.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing::{error, info};

use worker_faceid::api::server::init_tracing;
use worker_faceid::clients::{DynamoWorkerDirectory, RekognitionFaceIndex};
use worker_faceid::config::AppConfig;
use worker_faceid::models::event::ObjectCreatedEvent;
use worker_faceid::Registrar;

async fn build_registrar(config: &AppConfig) -> Registrar {
    let aws = aws_config::defaults(BehaviorVersion::latest()).load().await;

    Registrar::new(
        Arc::new(RekognitionFaceIndex::new(&aws)),
        Arc::new(DynamoWorkerDirectory::new(
            &aws,
            config.workers_table.clone(),
        )),
        config.face_collection.clone(),
    )
}

/// Decode the notification and run the enrollment. Any failure is logged and
/// propagated so the invocation is marked failed and the platform's own
/// retry and dead-letter handling applies.
async fn handle_notification(
    registrar: &Registrar,
    payload: &serde_json::Value,
) -> anyhow::Result<()> {
    let event = ObjectCreatedEvent::from_json(payload)?;
    let object = event.first_object()?;

    let record = registrar.register(&object).await.map_err(|err| {
        error!(
            bucket = %object.bucket,
            key = %object.key,
            error = %err,
            "failed to register worker image"
        );
        anyhow::Error::new(err)
    })?;

    info!(worker_id = %record.worker_id, "registration complete");
    Ok(())
}

#[cfg(not(feature = "lambda"))]
fn read_payload() -> anyhow::Result<serde_json::Value> {
    use anyhow::Context;
    use std::io::Read;

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read notification from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    serde_json::from_str(&raw).context("notification payload is not valid JSON")
}

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let payload = read_payload()?;
    let config = AppConfig::from_env();
    let registrar = build_registrar(&config).await;

    handle_notification(&registrar, &payload).await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    use lambda_runtime::{service_fn, LambdaEvent};

    init_tracing();

    let config = AppConfig::from_env();
    let registrar = build_registrar(&config).await;
    let registrar = &registrar;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<serde_json::Value>| async move {
            handle_notification(registrar, &event.payload)
                .await
                .map_err(lambda_runtime::Error::from)
        },
    ))
    .await
}
