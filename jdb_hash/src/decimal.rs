//! Fixed-point decimal keys and the minimal big-endian encoder.
//! 定点小数键与最小大端编码器
//!
//! Only the unscaled value takes part in hashing; `scale` travels with the
//! key so callers keep one type per column.
//! 只有未缩放值参与哈希；scale 随键携带。

macro_rules! decimal {
  ($($name:ident($rep:ty)),* $(,)?) => {
    $(
      #[doc = concat!("Decimal backed by `", stringify!($rep), "` / 以 `", stringify!($rep), "` 存储的小数")]
      #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
      pub struct $name {
        /// Unscaled value / 未缩放值
        pub value: $rep,
        /// Decimal scale, `value * 10^-scale` / 小数位
        pub scale: i32,
      }

      impl $name {
        #[inline(always)]
        #[must_use]
        pub const fn new(value: $rep, scale: i32) -> Self {
          Self { value, scale }
        }
      }
    )*
  };
}

decimal!(Decimal32(i32), Decimal64(i64), Decimal128(i128));

/// Minimal two's-complement big-endian bytes of an `i128`, stored inline.
/// i128 的最小补码大端字节，内联存储
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinBytes {
  buf: [u8; 16],
  len: u8,
}

impl MinBytes {
  /// Retained big-endian span / 保留的大端字节
  #[inline(always)]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf[16 - self.len as usize..]
  }

  #[inline(always)]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len as usize
  }

  /// Never empty, at least one byte is kept.
  /// 至少保留一个字节
  #[inline(always)]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    false
  }
}

/// Encode `v` the way a JVM `BigInteger.toByteArray()` does: the shortest
/// big-endian span that sign-extends back to `v`.
/// 按 JVM BigInteger.toByteArray() 编码：可符号扩展还原的最短大端字节
///
/// ```
/// use jdb_hash::decimal::min_bytes;
///
/// assert_eq!(min_bytes(0).as_bytes(), &[0x00]);
/// assert_eq!(min_bytes(-1).as_bytes(), &[0xff]);
/// assert_eq!(min_bytes(127).as_bytes(), &[0x7f]);
/// assert_eq!(min_bytes(128).as_bytes(), &[0x00, 0x80]);
/// ```
#[inline]
#[must_use]
pub fn min_bytes(v: i128) -> MinBytes {
  let le = v.to_le_bytes();
  let neg = v < 0;
  let fill = if neg { 0xff } else { 0x00 };

  // Drop sign-fill bytes from the most significant end, keep at least one
  // 从最高位端去掉符号填充字节，至少保留一个
  let mut len = le.len();
  while len > 1 && le[len - 1] == fill {
    len -= 1;
  }

  // Retained top byte must still carry the sign
  // 保留的最高字节必须仍带有符号位
  if len < le.len() && ((le[len - 1] & 0x80) != 0) != neg {
    len += 1;
  }

  MinBytes {
    buf: v.to_be_bytes(),
    len: len as u8,
  }
}
