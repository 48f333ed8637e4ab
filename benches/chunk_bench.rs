//! Benchmarks for chunkfile.
//!
//! Run with:
//!     cargo bench

use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempfile::NamedTempFile;

use chunkfile::{ChunkedFileReader, HashConfig, ReaderConfig};

const FILE_SIZE: usize = 4 * 1024 * 1024;

fn fixture(size: usize) -> NamedTempFile {
    // Deterministic pseudo-random data
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(&data).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn bench_sequential(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let mut group = c.benchmark_group("sequential");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    for chunk_size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut reader = ChunkedFileReader::open(file.path(), chunk_size).unwrap();
                    let mut total = 0usize;
                    while let Some(chunk) = reader.next_chunk().unwrap() {
                        total += black_box(chunk).len();
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let chunk_size = 64 * 1024;
    let mut group = c.benchmark_group("random_access");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    group.bench_function("reverse_read_at", |b| {
        let mut reader = ChunkedFileReader::open(file.path(), chunk_size).unwrap();
        b.iter(|| {
            let mut total = 0usize;
            for index in (0..reader.whole_chunk_count()).rev() {
                total += reader.read_at(black_box(index)).unwrap().len();
            }
            black_box(total)
        });
    });

    group.bench_function("strided_read_at", |b| {
        let mut reader = ChunkedFileReader::open(file.path(), chunk_size).unwrap();
        let count = reader.whole_chunk_count();
        b.iter(|| {
            let mut total = 0usize;
            for i in 0..count {
                let index = (i * 17) % count;
                total += reader.read_at(black_box(index)).unwrap().len();
            }
            black_box(total)
        });
    });

    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let file = fixture(FILE_SIZE);
    let mut group = c.benchmark_group("hashing");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    for (name, hash_config) in [
        ("no_hash", HashConfig::disabled()),
        ("blake3", HashConfig::enabled()),
    ] {
        let config = ReaderConfig::new(64 * 1024)
            .unwrap()
            .with_hash_config(hash_config);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut reader = ChunkedFileReader::with_config(file.path(), config).unwrap();
                let count = reader.for_each(|chunk, _| {
                    black_box(chunk.hash());
                });
                black_box(count.unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_random_access, bench_hashing);
criterion_main!(benches);
