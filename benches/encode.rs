use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encoder::encoder::codewords::build_codewords;
use rust_qr_encoder::encoder::tables::data_codewords;
use rust_qr_encoder::{ECLevel, EncodeRequest, EncoderConfig, QrEncoder, Version};

fn payload(version: Version, level: ECLevel) -> Vec<u8> {
    (0..data_codewords(version, level))
        .map(|i| (i * 73 % 251) as u8)
        .collect()
}

fn bench_encode_version(c: &mut Criterion, n: u8) {
    let version = Version::new(n).unwrap();
    let data = payload(version, ECLevel::M);
    let encoder = QrEncoder::new(EncoderConfig::default());
    c.bench_function(&format!("encode_v{n}_m"), |b| {
        b.iter(|| encoder.encode_data(black_box(&data), version, ECLevel::M))
    });
}

fn bench_encode_small(c: &mut Criterion) {
    bench_encode_version(c, 1);
}

fn bench_encode_medium(c: &mut Criterion) {
    bench_encode_version(c, 10);
}

fn bench_encode_large(c: &mut Criterion) {
    bench_encode_version(c, 40);
}

fn bench_build_codewords(c: &mut Criterion) {
    let version = Version::MAX;
    let data = payload(version, ECLevel::H);
    c.bench_function("build_codewords_v40_h", |b| {
        b.iter(|| build_codewords(black_box(&data), version, ECLevel::H))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let encoder = QrEncoder::new(EncoderConfig::default());
    let requests: Vec<EncodeRequest> = (1..=20)
        .map(|n| {
            let version = Version::new(n).unwrap();
            EncodeRequest::new(payload(version, ECLevel::Q), version, ECLevel::Q)
        })
        .collect();
    c.bench_function("encode_batch_v1_to_v20", |b| {
        b.iter(|| encoder.encode_batch(black_box(&requests)))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_medium,
    bench_encode_large,
    bench_build_codewords,
    bench_encode_batch
);
criterion_main!(benches);
