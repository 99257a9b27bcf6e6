use cipher_world_core::{
    additive_transform, autokey_decrypt, autokey_encrypt, vigenere_encrypt, Mode,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = "the quick brown fox jumps over the lazy dog, 40 times in a row!";

fn bench_additive(c: &mut Criterion) {
    let text = SAMPLE.repeat(40);
    c.bench_function("additive-encrypt", |b| {
        b.iter(|| additive_transform(black_box(&text), Mode::Encrypt, 13).unwrap())
    });
}

fn bench_autokey(c: &mut Criterion) {
    let text = SAMPLE.repeat(40);
    let encrypted = autokey_encrypt(&text, 7).unwrap();
    c.bench_function("autokey-encrypt", |b| {
        b.iter(|| autokey_encrypt(black_box(&text), 7).unwrap())
    });
    c.bench_function("autokey-decrypt", |b| {
        b.iter(|| autokey_decrypt(black_box(&encrypted), 7).unwrap())
    });
}

fn bench_vigenere(c: &mut Criterion) {
    let text = SAMPLE.repeat(40);
    c.bench_function("vigenere-encrypt", |b| {
        b.iter(|| vigenere_encrypt(black_box(&text), "lemon").unwrap())
    });
}

criterion_group!(benches, bench_additive, bench_autokey, bench_vigenere);
criterion_main!(benches);
