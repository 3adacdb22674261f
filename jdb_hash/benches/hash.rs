//! Criterion benchmark for per-element and byte-span hashing
//! 逐元素与字节段哈希的 Criterion 基准测试

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jdb_hash::{
  Algo, ByteHasher, Conf, Config, Decimal128, IdentityHash, Key, Murmur3, SparkMurmur3,
  hash_batch,
};

const N: usize = 1 << 16;

fn bench_bytes(c: &mut Criterion) {
  let mut group = c.benchmark_group("compute_bytes");
  let mut rng = fastrand::Rng::with_seed(7);
  for len in [3usize, 16, 64, 1024] {
    let mut data = vec![0u8; len];
    rng.fill(&mut data);
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_with_input(BenchmarkId::new("murmur3", len), &data, |b, d| {
      let h = Murmur3::default();
      b.iter(|| h.compute_bytes(black_box(d)))
    });
    group.bench_with_input(BenchmarkId::new("spark", len), &data, |b, d| {
      let h = SparkMurmur3::default();
      b.iter(|| h.compute_bytes(black_box(d)))
    });
  }
  group.finish();
}

fn bench_batch(c: &mut Criterion) {
  let mut group = c.benchmark_group("batch");
  group.throughput(Throughput::Elements(N as u64));
  let mut rng = fastrand::Rng::with_seed(11);
  let ints: Vec<i64> = (0..N).map(|_| rng.i64(..)).collect();
  let decs: Vec<Decimal128> = (0..N)
    .map(|_| Decimal128::new(i128::from(rng.i64(..)) << rng.u32(0..60), 2))
    .collect();
  let mut out = vec![0u32; N];

  group.bench_function("murmur3_i64", |b| {
    b.iter(|| hash_batch(&Murmur3::default(), black_box(&ints), &mut out))
  });
  group.bench_function("spark_i64", |b| {
    b.iter(|| hash_batch(&SparkMurmur3::default(), black_box(&ints), &mut out))
  });
  group.bench_function("identity_i64", |b| {
    b.iter(|| hash_batch(&IdentityHash, black_box(&ints), &mut out))
  });
  group.bench_function("spark_decimal128", |b| {
    b.iter(|| hash_batch(&SparkMurmur3::default(), black_box(&decs), &mut out))
  });
  group.finish();
}

fn bench_rows(c: &mut Criterion) {
  let mut group = c.benchmark_group("rows");
  group.throughput(Throughput::Elements(N as u64));
  let mut rng = fastrand::Rng::with_seed(13);
  let words: Vec<String> = (0..N)
    .map(|_| (0..rng.usize(1..24)).map(|_| rng.alphanumeric()).collect())
    .collect();
  let rows: Vec<[Option<Key>; 3]> = words
    .iter()
    .enumerate()
    .map(|(i, w)| {
      let null = rng.u8(..) < 16;
      [
        Some(Key::I64(i as i64)),
        (!null).then(|| Key::from(w.as_str())),
        Some(Key::F64(i as f64 * 0.5)),
      ]
    })
    .collect();
  let mut out = vec![0u32; N];

  for algo in [Algo::Murmur3, Algo::Spark] {
    let hasher = Config::from(&[Conf::Algo(algo)][..]).row_hasher();
    group.bench_function(format!("{algo:?}"), |b| {
      b.iter(|| hasher.hash_rows(black_box(&rows), &mut out))
    });
  }
  group.finish();
}

criterion_group!(benches, bench_bytes, bench_batch, bench_rows);
criterion_main!(benches);
