mod common;

use std::sync::Arc;

use serde_json::json;

use common::{FakeFaceIndex, FakeWorkerDirectory};
use worker_faceid::models::event::ObjectCreatedEvent;
use worker_faceid::{RegistrationError, Registrar};

fn notification(key: &str) -> serde_json::Value {
    json!({
        "Records": [{
            "eventName": "ObjectCreated:Put",
            "s3": {
                "bucket": { "name": "workerauthbucket" },
                "object": { "key": key }
            }
        }]
    })
}

#[tokio::test]
async fn notification_to_record_flow() {
    let directory = Arc::new(FakeWorkerDirectory::default());
    let registrar = Registrar::new(
        Arc::new(FakeFaceIndex::default().indexing("42.jpg", &["sig-1"])),
        directory.clone(),
        "workers".to_string(),
    );

    let event = ObjectCreatedEvent::from_json(&notification("42.jpg")).unwrap();
    let object = event.first_object().unwrap();
    registrar.register(&object).await.unwrap();

    let records = directory.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].signature_id, "sig-1");
    assert_eq!(records[0].worker_id, "42");
}

#[tokio::test]
async fn worker_id_keeps_prefix_before_first_dot() {
    let directory = Arc::new(FakeWorkerDirectory::default());
    let registrar = Registrar::new(
        Arc::new(FakeFaceIndex::default().indexing("4.2.png", &["sig-7"])),
        directory.clone(),
        "workers".to_string(),
    );

    let event = ObjectCreatedEvent::from_json(&notification("4.2.png")).unwrap();
    registrar
        .register(&event.first_object().unwrap())
        .await
        .unwrap();

    assert_eq!(directory.records()[0].worker_id, "4");
}

#[tokio::test]
async fn faceless_image_writes_nothing() {
    let directory = Arc::new(FakeWorkerDirectory::default());
    let registrar = Registrar::new(
        // No enrollment entry for the key: indexing finds no face
        Arc::new(FakeFaceIndex::default()),
        directory.clone(),
        "workers".to_string(),
    );

    let event = ObjectCreatedEvent::from_json(&notification("blank.jpg")).unwrap();
    let err = registrar
        .register(&event.first_object().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::NoFaceIndexed { .. }));
    assert!(directory.records().is_empty());
}
