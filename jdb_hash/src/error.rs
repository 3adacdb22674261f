//! Error types for key hashing.
//! 键哈希错误类型

use thiserror::Error;

use crate::TypeId;

/// Errors raised by hash functors.
/// 哈希函子产生的错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Key type has no hash defined at this layer (list, struct, or a
  /// non-arithmetic key passed to the identity hash).
  /// 该层未定义此键类型的哈希（list、struct，或传给恒等哈希的非算术键）
  #[error("unsupported key type {0:?} / 不支持的键类型 {0:?}")]
  UnsupportedKeyType(TypeId),
}

pub type Result<T> = std::result::Result<T, Error>;
