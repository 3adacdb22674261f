//! MurmurHash3 variant matching Apache Spark's `Murmur3_x86_32` bit for bit.
//! 与 Apache Spark `Murmur3_x86_32` 逐位一致的 MurmurHash3 变体
//!
//! Divergences from [`Murmur3`](crate::Murmur3):
//! 与 Murmur3 的差异：
//!
//! - tail bytes are sign-extended and mixed one by one through the full
//!   block step (`hashUnsafeBytes`)
//!   尾字节逐个符号扩展，并走完整的块混合步骤
//! - `bool`, 8-bit and 16-bit integers widen to 32 bits (JVM `int`)
//!   bool、8 位与 16 位整数扩展为 32 位
//! - 32/64-bit decimals widen to `i64` (JVM `long`)
//!   32/64 位小数扩展为 i64
//! - 128-bit decimals hash their `BigInteger.toByteArray()` bytes
//!   128 位小数对 BigInteger.toByteArray() 字节求哈希

use crate::{
  SPARK_SEED,
  canonical::Canonical,
  decimal::{Decimal32, Decimal64, Decimal128, min_bytes},
  dispatch::{ByteHasher, KeyHasher, impl_try_hash},
  mix::{blocks, fmix, mix_h1, mix_k1},
};

/// Spark-compatible 32-bit MurmurHash3 functor, default seed 42.
/// Spark 兼容的 32 位 MurmurHash3 函子，默认种子 42
///
/// ```
/// use jdb_hash::{KeyHasher, SparkMurmur3};
///
/// let h = SparkMurmur3::default();
/// // SELECT hash('Spark'), hash(1)
/// assert_eq!(h.hash("Spark") as i32, 228093765);
/// assert_eq!(h.hash(1i32) as i32, -559580957);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkMurmur3 {
  seed: u32,
}

impl Default for SparkMurmur3 {
  fn default() -> Self {
    Self::new(SPARK_SEED)
  }
}

impl SparkMurmur3 {
  #[inline(always)]
  #[must_use]
  pub const fn new(seed: u32) -> Self {
    Self { seed }
  }

  #[inline(always)]
  fn hash_int(&self, v: u32) -> u32 {
    self.compute_bytes(&v.to_le_bytes())
  }

  #[inline(always)]
  fn hash_long(&self, v: u64) -> u32 {
    self.compute_bytes(&v.to_le_bytes())
  }
}

impl ByteHasher for SparkMurmur3 {
  #[inline(always)]
  fn seed(&self) -> u32 {
    self.seed
  }

  #[inline(always)]
  fn with_seed(self, seed: u32) -> Self {
    Self::new(seed)
  }

  #[inline]
  fn compute_bytes(&self, data: &[u8]) -> u32 {
    let (mut h, tail) = blocks(self.seed, data);
    for &b in tail {
      // JVM byte is signed: sign-extend before widening
      // JVM 的 byte 有符号：扩展前先做符号扩展
      h = mix_h1(h, mix_k1(i32::from(b as i8) as u32));
    }
    fmix(h, data.len() as u32)
  }
}

macro_rules! widen {
  ($($t:ty => $via:ty),*) => {
    $(
      impl KeyHasher<$t> for SparkMurmur3 {
        #[inline(always)]
        fn hash(&self, key: $t) -> u32 {
          self.hash_int(<$via>::from(key) as u32)
        }
      }
    )*
  };
}

widen!(bool => i32, i8 => i32, i16 => i32, u8 => u32, u16 => u32, i32 => i32, u32 => u32);

impl KeyHasher<i64> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: i64) -> u32 {
    self.hash_long(key as u64)
  }
}

impl KeyHasher<u64> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: u64) -> u32 {
    self.hash_long(key)
  }
}

impl KeyHasher<f32> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: f32) -> u32 {
    self.hash_int(key.canonical_bits())
  }
}

impl KeyHasher<f64> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: f64) -> u32 {
    self.hash_long(key.canonical_bits())
  }
}

impl KeyHasher<Decimal32> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: Decimal32) -> u32 {
    self.hash_long(i64::from(key.value) as u64)
  }
}

impl KeyHasher<Decimal64> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: Decimal64) -> u32 {
    self.hash_long(key.value as u64)
  }
}

impl KeyHasher<Decimal128> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: Decimal128) -> u32 {
    self.compute_bytes(min_bytes(key.value).as_bytes())
  }
}

impl KeyHasher<&[u8]> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: &[u8]) -> u32 {
    self.compute_bytes(key)
  }
}

impl KeyHasher<&str> for SparkMurmur3 {
  #[inline(always)]
  fn hash(&self, key: &str) -> u32 {
    self.compute_bytes(key.as_bytes())
  }
}

impl_try_hash!(SparkMurmur3);
