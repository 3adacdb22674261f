//! Spark compatibility golden vectors
//! Spark 兼容性标准向量
//!
//! Expected values are Spark `hash()` outputs (seed 42), printed as JVM ints.

use aok::{OK, Void};
use jdb_hash::{
  ByteHasher, Decimal32, Decimal64, Decimal128, KeyHasher, Murmur3, SPARK_SEED, SparkMurmur3,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn spark() -> SparkMurmur3 {
  SparkMurmur3::default()
}

#[test]
fn test_default_seed() -> Void {
  assert_eq!(spark().seed(), SPARK_SEED);
  assert_eq!(SPARK_SEED, 42);
  OK
}

/// SELECT hash('Spark'), hash(''), hash(1)
#[test]
fn test_sql_vectors() -> Void {
  let h = spark();
  assert_eq!(h.hash("Spark") as i32, 228_093_765);
  assert_eq!(h.hash("") as i32, 142_593_372);
  assert_eq!(h.hash(1i32) as i32, -559_580_957);
  assert_eq!(h.hash(0i32) as i32, 933_211_791);
  assert_eq!(h.hash(42i32) as i32, 29_417_773);
  assert_eq!(h.hash(1i64) as i32, -1_712_319_331);
  assert_eq!(h.hash(42i64) as i32, 1_316_951_768);
  assert_eq!(h.hash(1.0f64) as i32, -460_888_942);
  OK
}

/// Tail bytes are sign-extended and fully mixed one at a time
/// 尾字节逐个符号扩展并完整混合
#[test]
fn test_tail_bytes() -> Void {
  let h = spark();
  assert_eq!(h.compute_bytes(b"a"), 0x5887_7852);
  assert_eq!(h.compute_bytes(b"ab"), 0xfa37_157b);
  assert_eq!(h.compute_bytes(b"abc"), 0x4ed2_cbb4);
  assert_eq!(h.compute_bytes(&[0xff]), 0x535b_391c);
  assert_eq!(h.compute_bytes(&[0x80, 0x81, 0x82]), 0x5bfa_07d1);
  // UTF-8 "你好", 6 bytes, high-bit tail
  assert_eq!(h.hash("你好") as i32, -1_433_715_577);
  OK
}

/// Whole blocks agree with the generic hash, tails diverge
/// 完整块与通用哈希一致，尾部不同
#[test]
fn test_diverges_only_on_tail() -> Void {
  for seed in [0u32, 42, 9001] {
    let s = SparkMurmur3::new(seed);
    let m = Murmur3::new(seed);
    assert_eq!(s.compute_bytes(b"abcd"), m.compute_bytes(b"abcd"));
    assert_eq!(s.compute_bytes(b""), m.compute_bytes(b""));
    assert_eq!(s.compute_bytes(b"abcdefgh"), m.compute_bytes(b"abcdefgh"));
    assert_ne!(s.compute_bytes(b"abc"), m.compute_bytes(b"abc"));
  }
  OK
}

/// Sub-32-bit integers widen to a JVM int
/// 32 位以下整数扩展为 JVM int
#[test]
fn test_int_promotion() -> Void {
  let h = spark();
  assert_eq!(h.hash(true), h.hash(1i32));
  assert_eq!(h.hash(false), h.hash(0i32));
  assert_eq!(h.hash(-1i8), h.hash(-1i32));
  assert_eq!(h.hash(-1i8) as i32, -1_604_776_387);
  assert_eq!(h.hash(-300i16), h.hash(-300i32));
  assert_eq!(h.hash(200u8), h.hash(200i32));
  assert_eq!(h.hash(u16::MAX), 0x9ee4_61d0);
  OK
}

#[test]
fn test_float_canonical() -> Void {
  let h = spark();
  assert_eq!(h.hash(0.0f32), h.hash(-0.0f32));
  assert_eq!(h.hash(0.0f64), h.hash(-0.0f64));
  assert_eq!(h.hash(0.0f64), h.hash(0i64));
  assert_eq!(h.hash(f32::NAN), h.hash(f32::from_bits(0xff80_0001)));
  assert_eq!(h.hash(f64::NAN), h.hash(f64::from_bits(0x7ff0_0000_0000_0001)));
  assert_eq!(h.hash(f32::NAN), h.hash(0x7fc0_0000u32));
  OK
}

/// 32/64-bit decimals hash as a JVM long
/// 32/64 位小数按 JVM long 求哈希
#[test]
fn test_decimal_widening() -> Void {
  let h = spark();
  assert_eq!(h.hash(Decimal64::new(123, 2)) as i32, -46_242_105);
  assert_eq!(h.hash(Decimal32::new(123, 2)), h.hash(Decimal64::new(123, 2)));
  assert_eq!(h.hash(Decimal32::new(-7, 0)), h.hash(-7i64));
  OK
}

/// 128-bit decimals hash BigInteger.toByteArray()
/// 128 位小数对 BigInteger.toByteArray() 求哈希
#[test]
fn test_decimal128() -> Void {
  let h = spark();
  let cases: [(i128, i32); 11] = [
    (0, -783_713_497),
    (-1, 1_398_487_324),
    (127, 1_185_089_389),
    (128, -544_401_882),
    (-128, 775_851_899),
    (-129, -771_458_971),
    (255, 1_246_198_977),
    (256, 188_218_374),
    (12_345_678_901_234_567_890_123, -434_902_821),
    (i128::MIN, 2_110_087_918),
    (i128::MAX, -1_255_691_256),
  ];
  for (v, expect) in cases {
    assert_eq!(h.hash(Decimal128::new(v, 0)) as i32, expect, "unscaled {v}");
  }
  // -1 encodes as the single byte 0xff
  assert_eq!(h.hash(Decimal128::new(-1, 4)), h.compute_bytes(&[0xff]));
  OK
}
