//! Throughput benchmarks.
//!
//! Run: `cargo bench -p paracrc`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p paracrc`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use paracrc::{Checksum, ChecksumCombine, Crc32c, Crc64Xz, Parallel, SliceBy};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 16384, 65536, 1048576];

fn bench_crc32c(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32c::compute(data)));
    });
    group.bench_with_input(BenchmarkId::new("slice16", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32c::compute_with(SliceBy::<16>, data)));
    });
  }

  group.finish();
}

fn bench_crc64_xz(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc64/xz");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc64Xz::compute(data)));
    });
  }

  group.finish();
}

fn bench_parallel(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc64/xz/parallel");
  group.sample_size(20);

  for size in [1 << 20, 8 << 20] {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc64Xz::compute_with(Parallel::<SliceBy<8>>::new(), data)));
    });
  }

  group.finish();
}

fn bench_combine(c: &mut Criterion) {
  let mut group = c.benchmark_group("combine");

  let data = vec![0u8; 1 << 20];
  let (a, b) = data.split_at(data.len() / 2);
  let (crc_a, crc_b) = (Crc64Xz::checksum(a), Crc64Xz::checksum(b));

  group.bench_function("crc64_xz_1mib_halves", |bench| {
    bench.iter(|| core::hint::black_box(<Crc64Xz as ChecksumCombine>::combine(crc_a, crc_b, b.len())));
  });

  group.finish();
}

criterion_group!(benches, bench_crc32c, bench_crc64_xz, bench_parallel, bench_combine);
criterion_main!(benches);
