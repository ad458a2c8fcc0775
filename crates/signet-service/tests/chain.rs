//! Device lifecycle and chain behaviour through the public service API.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use signet_core::{Algorithm, DeviceError, ErrorKind, genesis_value};
use signet_service::DeviceService;
use signet_storage::MemoryDeviceRepository;
use signet_test::{
    FailingSignerFactory, FakeSignerFactory, SequenceIds, fake_service, fake_service_with,
    setup_test_logging,
};

#[test]
fn test_created_device_starts_at_genesis() {
    let service = fake_service();

    for (id, alg, header) in [
        ("rsa-1", "RSA", "-----BEGIN RSA PUBLIC KEY-----"),
        ("ecc-1", "ECC", "-----BEGIN PUBLIC KEY-----"),
    ] {
        service.create_device(id, alg, "").unwrap();
        let device = service.get_device(id).unwrap();

        assert_eq!(device.algorithm.as_str(), alg);
        assert_eq!(device.signature_counter, 0);
        assert!(device.last_signature.is_empty());
        assert!(device.public_key.starts_with(header));
    }
}

#[test]
fn test_duplicate_create_keeps_original() {
    let service = fake_service();
    let original = service.create_device("dev-1", "ECC", "first").unwrap();
    service.sign("dev-1", "x").unwrap();

    let err = service.create_device("dev-1", "RSA", "second").unwrap_err();
    assert!(matches!(err, DeviceError::AlreadyExists(ref id) if id == "dev-1"));

    let stored = service.get_device("dev-1").unwrap();
    assert_eq!(stored.algorithm, Algorithm::Ecc);
    assert_eq!(stored.label, "first");
    assert_eq!(stored.public_key, original.public_key);
    assert_eq!(stored.signature_counter, 1);
}

#[test]
fn test_invalid_algorithm_skips_key_generation() {
    let factory = Arc::new(FakeSignerFactory::new());
    let service = DeviceService::new(
        Arc::new(MemoryDeviceRepository::new()),
        factory.clone(),
        Arc::new(SequenceIds::new("dev")),
    );

    for alg in ["rsa", "ecc", "ED25519", ""] {
        let err = service.create_device("dev-1", alg, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAlgorithm);
    }
    assert_eq!(factory.calls(), 0);

    service.create_device("dev-1", "RSA", "").unwrap();
    assert_eq!(factory.calls(), 1);
}

#[test]
fn test_empty_id_is_invalid_input() {
    let err = fake_service().create_device("", "RSA", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_key_generation_failure_is_unexpected() {
    let service = fake_service_with(Arc::new(FailingSignerFactory::KeyGeneration));

    let err = service.create_device("dev-1", "RSA", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(service.get_device("dev-1").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_first_signature_covers_genesis() {
    let service = fake_service();
    service.create_device("dev-1", "ECC", "").unwrap();

    let result = service.sign("dev-1", "hello").unwrap();
    assert_eq!(result.signed_data, format!("0_hello_{}", genesis_value("dev-1")));
    assert_eq!(result.signed_data, "0_hello_ZGV2LTE=");
}

#[test]
fn test_sequential_signs_link_the_chain() {
    let service = fake_service();
    service.create_device("dev-1", "RSA", "").unwrap();

    let mut previous = genesis_value("dev-1");
    let mut last = None;
    for n in 0..10u64 {
        let data = format!("tx-{n}");
        let result = service.sign("dev-1", &data).unwrap();

        assert_eq!(result.signed_data, format!("{n}_{data}_{previous}"));
        assert!(service
            .verify("dev-1", &result.signed_data, &result.signature)
            .unwrap());

        previous.clone_from(&result.signature);
        last = Some(result);
    }

    let device = service.get_device("dev-1").unwrap();
    assert_eq!(device.signature_counter, 10);
    assert_eq!(device.last_signature, last.unwrap().signature);
}

#[test]
fn test_data_may_contain_separators() {
    let service = fake_service();
    service.create_device("dev-1", "ECC", "").unwrap();

    let result = service.sign("dev-1", "a_b_c").unwrap();
    assert_eq!(result.signed_data, "0_a_b_c_ZGV2LTE=");
}

#[test]
fn test_empty_data_is_rejected_without_side_effects() {
    let service = fake_service();
    service.create_device("dev-1", "ECC", "").unwrap();
    service.sign("dev-1", "x").unwrap();
    let before = service.get_device("dev-1").unwrap();

    let err = service.sign("dev-1", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(service.get_device("dev-1").unwrap(), before);

    // Validation happens before the lookup.
    let err = service.sign("nope", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_unknown_device_is_not_found() {
    let service = fake_service();

    assert_eq!(service.get_device("nope").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(service.sign("nope", "x").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_signing_failure_leaves_device_untouched() {
    let service = fake_service_with(Arc::new(FailingSignerFactory::SigningAfter(2)));
    service.create_device("dev-1", "ECC", "").unwrap();

    service.sign("dev-1", "a").unwrap();
    let second = service.sign("dev-1", "b").unwrap();

    let err = service.sign("dev-1", "c").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);

    let device = service.get_device("dev-1").unwrap();
    assert_eq!(device.signature_counter, 2);
    assert_eq!(device.last_signature, second.signature);
}

#[test]
fn test_device_keeps_signing_after_signer_panic() {
    setup_test_logging("signet_service=debug");
    let service = fake_service_with(Arc::new(FailingSignerFactory::PanicOnFirstSign));
    service.create_device("dev-1", "ECC", "").unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| service.sign("dev-1", "x")));
    assert!(outcome.is_err());

    let device = service.get_device("dev-1").unwrap();
    assert_eq!(device.signature_counter, 0);
    assert!(device.last_signature.is_empty());

    let first = service.sign("dev-1", "x").unwrap();
    assert_eq!(first.signed_data, format!("0_x_{}", genesis_value("dev-1")));
    let second = service.sign("dev-1", "y").unwrap();
    assert_eq!(second.signed_data, format!("1_y_{}", first.signature));

    assert_eq!(service.get_device("dev-1").unwrap().signature_counter, 2);
}

#[test]
fn test_list_devices() {
    let service = fake_service();
    assert!(service.list_devices().unwrap().is_empty());

    service.create_device("a", "RSA", "").unwrap();
    service.create_device("b", "ECC", "").unwrap();

    let mut ids: Vec<_> = service
        .list_devices()
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    ids.sort();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_generated_ids_are_usable() {
    let service = fake_service();
    let id = service.generate_id();
    assert_eq!(id, "dev-1");

    service.create_device(&id, "ECC", "").unwrap();
    assert_eq!(service.get_device("dev-1").unwrap().id, "dev-1");
}
