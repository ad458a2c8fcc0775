//! End-to-end calls over a real WebSocket connection.

use std::sync::Arc;

use jsonrpsee::core::ClientError;
use jsonrpsee::server::ServerHandle;
use jsonrpsee::ws_client::{WsClient, WsClientBuilder};
use signet_core::Algorithm;
use signet_gateway::{CreateDeviceParams, GatewayServer, SignetRpcClient, error_codes};
use signet_test::{FailingSignerFactory, fake_service, fake_service_with, setup_test_logging};

async fn connect(service: signet_service::DeviceService) -> (ServerHandle, WsClient) {
    setup_test_logging("signet_gateway=debug");
    let (handle, addr) = GatewayServer::start("127.0.0.1:0", service).await.unwrap();
    let client = WsClientBuilder::default()
        .build(format!("ws://{addr}"))
        .await
        .unwrap();
    (handle, client)
}

fn code_of(err: ClientError) -> i32 {
    match err {
        ClientError::Call(obj) => obj.code(),
        other => panic!("expected call error, got {other:?}"),
    }
}

fn ecc(id: &str) -> CreateDeviceParams {
    CreateDeviceParams {
        id: Some(id.to_owned()),
        algorithm: "ECC".to_owned(),
        label: String::new(),
    }
}

#[tokio::test]
async fn test_health() {
    let (_handle, client) = connect(fake_service()).await;
    assert_eq!(client.health().await.unwrap().status, "ok");
}

#[tokio::test]
async fn test_create_sign_verify_flow() {
    let (_handle, client) = connect(fake_service()).await;

    let device = client.create_device(ecc("dev-1")).await.unwrap();
    assert_eq!(device.id, "dev-1");
    assert_eq!(device.algorithm, Algorithm::Ecc);

    let first = client
        .sign_transaction("dev-1".into(), "hello".into())
        .await
        .unwrap();
    assert_eq!(first.signed_data, "0_hello_ZGV2LTE=");

    let second = client
        .sign_transaction("dev-1".into(), "again".into())
        .await
        .unwrap();
    assert_eq!(second.signed_data, format!("1_again_{}", first.signature));

    assert!(
        client
            .verify_signature("dev-1".into(), second.signed_data.clone(), second.signature.clone())
            .await
            .unwrap()
    );
    assert!(
        !client
            .verify_signature("dev-1".into(), first.signed_data, second.signature)
            .await
            .unwrap()
    );

    let fetched = client.get_device("dev-1".into()).await.unwrap();
    assert_eq!(fetched.signature_counter, 2);

    let listed = client.list_devices().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_missing_id_is_generated() {
    let (_handle, client) = connect(fake_service()).await;

    let device = client
        .create_device(CreateDeviceParams {
            id: None,
            algorithm: "RSA".to_owned(),
            label: "till 3".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(device.id, "dev-1");
    assert_eq!(device.label, "till 3");
}

#[tokio::test]
async fn test_error_codes() {
    let (_handle, client) = connect(fake_service()).await;
    client.create_device(ecc("dev-1")).await.unwrap();

    let err = client.create_device(ecc("dev-1")).await.unwrap_err();
    assert_eq!(code_of(err), error_codes::ALREADY_EXISTS);

    let err = client.create_device(ecc("")).await.unwrap_err();
    assert_eq!(code_of(err), error_codes::INVALID_INPUT);

    let mut bad = ecc("dev-2");
    bad.algorithm = "DSA".to_owned();
    let err = client.create_device(bad).await.unwrap_err();
    assert_eq!(code_of(err), error_codes::INVALID_ALGORITHM);

    let err = client.get_device("nope".into()).await.unwrap_err();
    assert_eq!(code_of(err), error_codes::NOT_FOUND);

    let err = client
        .sign_transaction("dev-1".into(), String::new())
        .await
        .unwrap_err();
    assert_eq!(code_of(err), error_codes::INVALID_INPUT);
}

#[tokio::test]
async fn test_signing_failure_is_unexpected() {
    let service = fake_service_with(Arc::new(FailingSignerFactory::SigningAfter(0)));
    let (_handle, client) = connect(service).await;
    client.create_device(ecc("dev-1")).await.unwrap();

    let err = client
        .sign_transaction("dev-1".into(), "x".into())
        .await
        .unwrap_err();
    assert_eq!(code_of(err), error_codes::UNEXPECTED);

    let device = client.get_device("dev-1".into()).await.unwrap();
    assert_eq!(device.signature_counter, 0);
}

#[tokio::test]
async fn test_panicked_sign_does_not_brick_device() {
    let service = fake_service_with(Arc::new(FailingSignerFactory::PanicOnFirstSign));
    let (_handle, client) = connect(service).await;
    client.create_device(ecc("dev-1")).await.unwrap();

    let err = client
        .sign_transaction("dev-1".into(), "x".into())
        .await
        .unwrap_err();
    assert_eq!(code_of(err), error_codes::UNEXPECTED);

    let result = client
        .sign_transaction("dev-1".into(), "x".into())
        .await
        .unwrap();
    assert!(result.signed_data.starts_with("0_x_"));

    let device = client.get_device("dev-1".into()).await.unwrap();
    assert_eq!(device.signature_counter, 1);
    assert_eq!(device.last_signature, result.signature);
}

#[tokio::test]
async fn test_bind_failure() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let result = GatewayServer::start(&addr, fake_service()).await;
    assert!(matches!(
        result,
        Err(signet_gateway::GatewayError::Bind { .. })
    ));
}
