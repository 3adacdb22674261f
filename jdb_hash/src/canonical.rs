//! Float canonicalization before hashing.
//! 哈希前的浮点规范化
//!
//! `-0.0` becomes `+0.0` and every NaN becomes the quiet NaN of its width,
//! so NaNs form one group-by class and both zeros hash alike.
//! -0.0 归一为 +0.0，所有 NaN 归一为同宽度的 quiet NaN。

pub const F32_CANONICAL_NAN: u32 = 0x7fc0_0000;
pub const F64_CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// Float types with a canonical bit pattern.
/// 具有规范位模式的浮点类型
pub trait Canonical: Copy {
  type Bits: Copy;

  /// Canonical bit pattern / 规范位模式
  fn canonical_bits(self) -> Self::Bits;
}

impl Canonical for f32 {
  type Bits = u32;

  #[inline(always)]
  fn canonical_bits(self) -> u32 {
    if self.is_nan() {
      F32_CANONICAL_NAN
    } else if self == 0.0 {
      0
    } else {
      self.to_bits()
    }
  }
}

impl Canonical for f64 {
  type Bits = u64;

  #[inline(always)]
  fn canonical_bits(self) -> u64 {
    if self.is_nan() {
      F64_CANONICAL_NAN
    } else if self == 0.0 {
      0
    } else {
      self.to_bits()
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_canonical_bits() {
    assert_eq!((-0.0f32).canonical_bits(), 0);
    assert_eq!((-0.0f64).canonical_bits(), 0);
    assert_eq!(1.5f32.canonical_bits(), 1.5f32.to_bits());
    assert_eq!(f32::from_bits(0xff80_0001).canonical_bits(), F32_CANONICAL_NAN);
    assert_eq!((-f64::NAN).canonical_bits(), F64_CANONICAL_NAN);
    assert_eq!(f64::NEG_INFINITY.canonical_bits(), f64::NEG_INFINITY.to_bits());
  }
}
