use criterion::{Criterion, criterion_group, criterion_main};
use seal_chain::{
    AesCtrCipher, CounterMode, HybridKeyExchange, RsaKeyPair, RsaPadding, SymmetricKey,
};
use std::hint::black_box;

fn bench_rsa(c: &mut Criterion) {
    let keys = RsaKeyPair::generate(2048).unwrap();
    let session_key = SymmetricKey::generate().unwrap();

    for padding in [RsaPadding::OaepSha256, RsaPadding::Pkcs1v15] {
        c.bench_function(&format!("RSA-2048 {} encrypt 16B", padding), |b| {
            b.iter(|| keys.encrypt(padding, black_box(session_key.as_bytes())).unwrap());
        });
        let ciphertext = keys.encrypt(padding, session_key.as_bytes()).unwrap();
        c.bench_function(&format!("RSA-2048 {} decrypt 16B", padding), |b| {
            b.iter(|| keys.decrypt(padding, black_box(&ciphertext)).unwrap());
        });
    }
}

fn bench_aes_ctr(c: &mut Criterion) {
    let key = SymmetricKey::generate().unwrap();
    let data = vec![0x61u8; 64 * 1024];

    for mode in [CounterMode::RandomIv, CounterMode::Fixed] {
        c.bench_function(&format!("AES-128-CTR {} encrypt 64KB", mode), |b| {
            b.iter(|| AesCtrCipher::encrypt(&key, mode, black_box(&data)).unwrap());
        });
    }
}

fn bench_exchange(c: &mut Criterion) {
    let mut alice = HybridKeyExchange::new();
    alice.generate_rsa().unwrap();
    let mut bob = HybridKeyExchange::new();
    bob.load_rsa(&alice.export_public_pem().unwrap()).unwrap();
    bob.generate_symmetric_key().unwrap();
    let encoded = bob.encrypt_symmetric_key_for_chain().unwrap();

    c.bench_function("decrypt_and_load_symmetric_key", |b| {
        b.iter(|| alice.decrypt_and_load_symmetric_key(black_box(&encoded)).unwrap());
    });

    let message = "x".repeat(1024);
    c.bench_function("encrypt_for_chain 1KB text", |b| {
        b.iter(|| bob.encrypt_for_chain(black_box(&message)).unwrap());
    });
}

criterion_group!(benches, bench_rsa, bench_aes_ctr, bench_exchange);
criterion_main!(benches);
