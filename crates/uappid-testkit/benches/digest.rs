//! Criterion benchmarks for digest computation and identity derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uappid_core::{BinaryArtifact, Deriver, DigestAlgorithm};
use uappid_testkit::fixtures::{alpha_certificate, beta_certificate};

/// Benchmark one-shot hashing at 1 KiB and 64 KiB across all algorithms.
fn bench_hash(c: &mut Criterion) {
    let sizes: &[(&str, usize)] = &[("1k", 1024), ("64k", 64 * 1024)];

    for &(label, size) in sizes {
        let data = vec![0xABu8; size];
        let mut group = c.benchmark_group(format!("hash_{label}"));
        for algorithm in DigestAlgorithm::ALL {
            group.bench_function(algorithm.name(), |b| {
                b.iter(|| {
                    let digest = algorithm.hash(black_box(&data));
                    black_box(digest);
                });
            });
        }
        group.finish();
    }
}

/// Benchmark chunked streaming against the one-shot path at 64 KiB.
fn bench_hash_reader(c: &mut Criterion) {
    let data = vec![0xABu8; 64 * 1024];
    let algorithm = DigestAlgorithm::Sha256;

    c.bench_function("hash_reader_64k_sha256", |b| {
        b.iter(|| {
            let mut reader = std::io::Cursor::new(black_box(&data));
            let digest = algorithm.hash_reader(&mut reader).expect("cursor read");
            black_box(digest);
        });
    });
}

/// Benchmark a full derivation over a 256 KiB artifact with two signers.
fn bench_derive(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create bench dir");
    let path = dir.path().join("base.apk");
    std::fs::write(&path, vec![0xABu8; 256 * 1024]).expect("write artifact");

    let artifact = BinaryArtifact::new(&path);
    let certificates = vec![alpha_certificate(), beta_certificate()];
    let deriver = Deriver::new(DigestAlgorithm::Sha256);

    c.bench_function("derive_256k_two_certs", |b| {
        b.iter(|| {
            let record = deriver
                .derive(black_box("com.example.app"), &certificates, &artifact)
                .expect("derive failed");
            black_box(record);
        });
    });
}

criterion_group!(benches, bench_hash, bench_hash_reader, bench_derive);
criterion_main!(benches);
