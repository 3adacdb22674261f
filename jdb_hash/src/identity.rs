//! Identity hash: the key's own bits, for keys already well distributed.
//! 恒等哈希：直接返回键自身的位，用于已分布良好的键

use crate::{Error, Key, Result, canonical::Canonical, dispatch::KeyHasher};

/// Passthrough functor for arithmetic keys. No mixing, no seed.
/// 算术键的直通函子，不混合，不使用种子
///
/// Integers convert with `as u32` (truncate or sign-extend), floats give
/// their canonical bit pattern. `f64` folds the high word onto the low one,
/// so sign, exponent and top mantissa survive the reduction.
/// 整数按 as u32 转换，浮点取规范位模式；f64 将高 32 位异或到低 32 位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityHash;

macro_rules! cast {
  ($($t:ty),*) => {
    $(
      impl KeyHasher<$t> for IdentityHash {
        #[inline(always)]
        fn hash(&self, key: $t) -> u32 {
          key as u32
        }
      }
    )*
  };
}

cast!(i8, i16, i32, i64, u8, u16, u32, u64);

impl KeyHasher<bool> for IdentityHash {
  #[inline(always)]
  fn hash(&self, key: bool) -> u32 {
    u32::from(key)
  }
}

impl KeyHasher<f32> for IdentityHash {
  #[inline(always)]
  fn hash(&self, key: f32) -> u32 {
    key.canonical_bits()
  }
}

impl KeyHasher<f64> for IdentityHash {
  #[inline(always)]
  fn hash(&self, key: f64) -> u32 {
    let bits = key.canonical_bits();
    (bits ^ (bits >> 32)) as u32
  }
}

impl crate::dispatch::TryKeyHasher for IdentityHash {
  #[inline]
  fn try_hash(&self, key: &Key<'_>) -> Result<u32> {
    let type_id = key.type_id();
    if !type_id.is_arithmetic() {
      return Err(Error::UnsupportedKeyType(type_id));
    }
    Ok(match *key {
      Key::Bool(v) => self.hash(v),
      Key::I8(v) => self.hash(v),
      Key::I16(v) => self.hash(v),
      Key::I32(v) => self.hash(v),
      Key::I64(v) => self.hash(v),
      Key::U8(v) => self.hash(v),
      Key::U16(v) => self.hash(v),
      Key::U32(v) => self.hash(v),
      Key::U64(v) => self.hash(v),
      Key::F32(v) => self.hash(v),
      Key::F64(v) => self.hash(v),
      _ => return Err(Error::UnsupportedKeyType(type_id)),
    })
  }
}
