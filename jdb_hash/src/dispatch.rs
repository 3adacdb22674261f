//! Static per-type dispatch.
//! 静态的按类型分发
//!
//! Each functor implements [`KeyHasher<K>`] for the closed set of
//! [`HashKey`] types, so the byte view of every key type is picked at
//! compile time and inlines per element. [`TryKeyHasher`] covers the
//! dynamic [`Key`] boundary, where nested types surface as
//! [`Error::UnsupportedKeyType`].
//!
//! [`Key`]: crate::Key
//! [`Error::UnsupportedKeyType`]: crate::Error::UnsupportedKeyType

use crate::{
  HashValue, Key, Result,
  decimal::{Decimal32, Decimal64, Decimal128},
};

mod sealed {
  pub trait Sealed {}
}

/// Key types with a defined hash. Sealed: list and struct never qualify.
/// 定义了哈希的键类型（封闭集合，list 与 struct 永不属于）
pub trait HashKey: sealed::Sealed + Copy {}

macro_rules! hash_key {
  ($($t:ty),* $(,)?) => {
    $(
      impl sealed::Sealed for $t {}
      impl HashKey for $t {}
    )*
  };
}

hash_key!(
  bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Decimal32, Decimal64, Decimal128
);

impl sealed::Sealed for &[u8] {}
impl HashKey for &[u8] {}
impl sealed::Sealed for &str {}
impl HashKey for &str {}

/// Hash one key of a statically known type.
/// 对静态已知类型的单个键求哈希
pub trait KeyHasher<K: HashKey> {
  fn hash(&self, key: K) -> HashValue;
}

/// Functors hashing raw byte spans, usable to compose multi-field hashes.
/// 对原始字节求哈希的函子，可用于组合多字段哈希
pub trait ByteHasher: Copy + Send + Sync {
  fn seed(&self) -> u32;

  /// Same functor bound to another seed / 绑定新种子的同一函子
  #[must_use]
  fn with_seed(self, seed: u32) -> Self;

  fn compute_bytes(&self, data: &[u8]) -> HashValue;
}

/// Hash a dynamically typed [`Key`].
/// 对动态类型的 Key 求哈希
pub trait TryKeyHasher {
  /// # Errors
  /// `Error::UnsupportedKeyType` when the functor defines no hash for the key's type.
  fn try_hash(&self, key: &Key<'_>) -> Result<HashValue>;
}

/// `TryKeyHasher` for functors accepting every non-nested key.
macro_rules! impl_try_hash {
  ($t:ty) => {
    impl $crate::dispatch::TryKeyHasher for $t {
      #[inline]
      fn try_hash(&self, key: &$crate::Key<'_>) -> $crate::Result<$crate::HashValue> {
        use $crate::{Key, dispatch::KeyHasher};
        Ok(match *key {
          Key::Bool(v) => KeyHasher::hash(self, v),
          Key::I8(v) => KeyHasher::hash(self, v),
          Key::I16(v) => KeyHasher::hash(self, v),
          Key::I32(v) => KeyHasher::hash(self, v),
          Key::I64(v) => KeyHasher::hash(self, v),
          Key::U8(v) => KeyHasher::hash(self, v),
          Key::U16(v) => KeyHasher::hash(self, v),
          Key::U32(v) => KeyHasher::hash(self, v),
          Key::U64(v) => KeyHasher::hash(self, v),
          Key::F32(v) => KeyHasher::hash(self, v),
          Key::F64(v) => KeyHasher::hash(self, v),
          Key::Decimal32(v) => KeyHasher::hash(self, v),
          Key::Decimal64(v) => KeyHasher::hash(self, v),
          Key::Decimal128(v) => KeyHasher::hash(self, v),
          Key::Str(v) => KeyHasher::hash(self, v),
          Key::List(_) | Key::Struct(_) => {
            return Err($crate::Error::UnsupportedKeyType(key.type_id()));
          }
        })
      }
    }
  };
}

pub(crate) use impl_try_hash;

/// Hash a typed column slice into `out`.
/// 将类型化列切片的哈希写入 out
///
/// # Panics
/// If `keys` and `out` differ in length.
#[inline]
pub fn hash_batch<K, H>(hasher: &H, keys: &[K], out: &mut [HashValue])
where
  K: HashKey,
  H: KeyHasher<K>,
{
  assert_eq!(keys.len(), out.len(), "hash_batch: keys / out length");
  for (o, &k) in out.iter_mut().zip(keys) {
    *o = hasher.hash(k);
  }
}
