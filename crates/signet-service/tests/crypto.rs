//! Real-key signatures verified by a consumer holding only the public key.

use signet_core::Algorithm;
use signet_crypto::verify_with_public_pem;
use signet_service::DeviceService;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

fn assert_verifies_and_detects_tamper(algorithm: &str) {
    let service = DeviceService::in_memory();
    let device = service.create_device("dev-1", algorithm, "").unwrap();
    let algorithm: Algorithm = algorithm.parse().unwrap();

    let result = service.sign("dev-1", "hello").unwrap();
    let signature = BASE64.decode(&result.signature).unwrap();
    let payload = result.signed_data.as_bytes();

    assert!(verify_with_public_pem(algorithm, &device.public_key, payload, &signature).unwrap());

    for i in 0..payload.len() {
        let mut tampered = payload.to_vec();
        tampered[i] ^= 0x01;
        assert!(
            !verify_with_public_pem(algorithm, &device.public_key, &tampered, &signature).unwrap(),
            "tampered byte {i} still verified"
        );
    }
}

#[test]
fn test_ecc_signature_verifies_against_public_key() {
    assert_verifies_and_detects_tamper("ECC");
}

#[test]
fn test_rsa_signature_verifies_against_public_key() {
    assert_verifies_and_detects_tamper("RSA");
}

#[test]
fn test_rsa_device_publishes_pkcs1_key() {
    let service = DeviceService::in_memory();
    let device = service.create_device("dev-1", "RSA", "").unwrap();
    assert!(device.public_key.starts_with("-----BEGIN RSA PUBLIC KEY-----"));
}
