use std::sync::Arc;

use bridge_validator::validator::{
    KeyMaterial, NetworkConfig, ValidationCoordinator, ValidationRequest, ValidatorRegistry,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_sign_and_verify(c: &mut Criterion) {
    let keys = KeyMaterial::generate().expect("key generation");
    let payload = b"bridge transfer payload for benchmarking";
    let signature = keys.sign(payload).expect("signing");

    c.bench_function("ecdsa_sign", |b| {
        b.iter(|| keys.sign(black_box(payload)).unwrap())
    });

    c.bench_function("ecdsa_verify", |b| {
        b.iter(|| assert!(keys.verify(black_box(payload), black_box(&signature))))
    });
}

fn bench_quorum_round(c: &mut Criterion) {
    let registry = Arc::new(ValidatorRegistry::bootstrap(NetworkConfig::default()).unwrap());
    let coordinator = ValidationCoordinator::new(Arc::clone(&registry));
    let request = ValidationRequest::new("bench-tx", b"bench payload".to_vec());

    c.bench_function("validate_transaction_4_of_7", |b| {
        b.iter(|| {
            let result = coordinator.validate_transaction(black_box(&request));
            assert!(result.approved);
        })
    });

    let signatures = coordinator.validate_transaction(&request).signatures;
    c.bench_function("verify_multi_signature_4_of_7", |b| {
        b.iter(|| {
            assert!(coordinator.verify_multi_signature(
                "bench-tx",
                black_box(b"bench payload"),
                black_box(&signatures),
            ))
        })
    });
}

criterion_group!(benches, bench_sign_and_verify, bench_quorum_round);
criterion_main!(benches);
