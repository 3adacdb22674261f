//! MurmurHash3 x86_32 over canonical key bytes.
//! 基于规范键字节的 MurmurHash3 x86_32

use crate::{
  DEFAULT_SEED,
  canonical::Canonical,
  decimal::{Decimal32, Decimal64, Decimal128},
  dispatch::{ByteHasher, KeyHasher, impl_try_hash},
  mix::{blocks, fmix, mix_k1},
};

/// Generic 32-bit MurmurHash3 functor.
/// 通用 32 位 MurmurHash3 函子
///
/// ```
/// use jdb_hash::{ByteHasher, KeyHasher, Murmur3};
///
/// let h = Murmur3::new(0);
/// assert_eq!(h.compute_bytes(b"test"), 0xba6b_d213);
/// assert_eq!(h.hash(0.0f64), h.hash(-0.0f64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3 {
  seed: u32,
}

impl Default for Murmur3 {
  fn default() -> Self {
    Self::new(DEFAULT_SEED)
  }
}

impl Murmur3 {
  #[inline(always)]
  #[must_use]
  pub const fn new(seed: u32) -> Self {
    Self { seed }
  }
}

impl ByteHasher for Murmur3 {
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
    // Tail bytes packed little-endian, zero-extended, mixed once
    // 尾字节按小端零扩展打包，只混合一次
    if !tail.is_empty() {
      let mut k = 0u32;
      for (i, &b) in tail.iter().enumerate() {
        k |= u32::from(b) << (8 * i);
      }
      h ^= mix_k1(k);
    }
    fmix(h, data.len() as u32)
  }
}

macro_rules! le_bytes {
  ($($t:ty),*) => {
    $(
      impl KeyHasher<$t> for Murmur3 {
        #[inline(always)]
        fn hash(&self, key: $t) -> u32 {
          self.compute_bytes(&key.to_le_bytes())
        }
      }
    )*
  };
}

le_bytes!(i8, i16, i32, i64, u8, u16, u32, u64);

impl KeyHasher<bool> for Murmur3 {
  #[inline(always)]
  fn hash(&self, key: bool) -> u32 {
    self.compute_bytes(&[u8::from(key)])
  }
}

impl KeyHasher<f32> for Murmur3 {
  #[inline(always)]
  fn hash(&self, key: f32) -> u32 {
    self.compute_bytes(&key.canonical_bits().to_le_bytes())
  }
}

impl KeyHasher<f64> for Murmur3 {
  #[inline(always)]
  fn hash(&self, key: f64) -> u32 {
    self.compute_bytes(&key.canonical_bits().to_le_bytes())
  }
}

macro_rules! decimal_raw {
  ($($t:ty),*) => {
    $(
      impl KeyHasher<$t> for Murmur3 {
        #[inline(always)]
        fn hash(&self, key: $t) -> u32 {
          self.compute_bytes(&key.value.to_le_bytes())
        }
      }
    )*
  };
}

decimal_raw!(Decimal32, Decimal64, Decimal128);

impl KeyHasher<&[u8]> for Murmur3 {
  #[inline(always)]
  fn hash(&self, key: &[u8]) -> u32 {
    self.compute_bytes(key)
  }
}

impl KeyHasher<&str> for Murmur3 {
  #[inline(always)]
  fn hash(&self, key: &str) -> u32 {
    self.compute_bytes(key.as_bytes())
  }
}

impl_try_hash!(Murmur3);
