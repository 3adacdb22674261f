//! Column element types and the closed key sum type.
//! 列元素类型与封闭的键和类型

use crate::{
  Error, Result,
  decimal::{Decimal32, Decimal64, Decimal128},
};

/// Column element type.
/// 列元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
  Bool8,
  Int8,
  Int16,
  Int32,
  Int64,
  Uint8,
  Uint16,
  Uint32,
  Uint64,
  Float32,
  Float64,
  Decimal32,
  Decimal64,
  Decimal128,
  String,
  List,
  Struct,
}

impl TypeId {
  /// Nested types have no element hash at this layer.
  /// 嵌套类型在此层没有元素哈希
  #[inline]
  #[must_use]
  pub const fn is_nested(self) -> bool {
    matches!(self, Self::List | Self::Struct)
  }

  /// Whether byte hashes (`Murmur3`, `SparkMurmur3`) accept this type.
  /// 字节哈希是否接受此类型
  #[inline]
  #[must_use]
  pub const fn is_hashable(self) -> bool {
    !self.is_nested()
  }

  /// Bool, integer and float types, the only ones `IdentityHash` accepts.
  /// 布尔、整数与浮点类型，恒等哈希只接受这些
  #[inline]
  #[must_use]
  pub const fn is_arithmetic(self) -> bool {
    matches!(
      self,
      Self::Bool8
        | Self::Int8
        | Self::Int16
        | Self::Int32
        | Self::Int64
        | Self::Uint8
        | Self::Uint16
        | Self::Uint32
        | Self::Uint64
        | Self::Float32
        | Self::Float64
    )
  }
}

/// Type check run once per column before a hashing pass.
/// 哈希前对每列执行一次的类型检查
///
/// # Errors
/// `Error::UnsupportedKeyType` for list and struct columns.
pub fn check_hashable(type_id: TypeId) -> Result<()> {
  if type_id.is_hashable() {
    Ok(())
  } else {
    log::warn!("reject nested column {type_id:?} / 拒绝嵌套列 {type_id:?}");
    Err(Error::UnsupportedKeyType(type_id))
  }
}

/// One column element, resolved by exhaustive `match`.
/// 单个列元素，通过穷尽 match 解析
///
/// `Str` is a byte view (not null-terminated, not required to be UTF-8).
/// `List` and `Struct` carry their children but are never hashed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key<'a> {
  Bool(bool),
  I8(i8),
  I16(i16),
  I32(i32),
  I64(i64),
  U8(u8),
  U16(u16),
  U32(u32),
  U64(u64),
  F32(f32),
  F64(f64),
  Decimal32(Decimal32),
  Decimal64(Decimal64),
  Decimal128(Decimal128),
  Str(&'a [u8]),
  List(&'a [Key<'a>]),
  Struct(&'a [Key<'a>]),
}

impl Key<'_> {
  #[must_use]
  pub const fn type_id(&self) -> TypeId {
    match self {
      Self::Bool(_) => TypeId::Bool8,
      Self::I8(_) => TypeId::Int8,
      Self::I16(_) => TypeId::Int16,
      Self::I32(_) => TypeId::Int32,
      Self::I64(_) => TypeId::Int64,
      Self::U8(_) => TypeId::Uint8,
      Self::U16(_) => TypeId::Uint16,
      Self::U32(_) => TypeId::Uint32,
      Self::U64(_) => TypeId::Uint64,
      Self::F32(_) => TypeId::Float32,
      Self::F64(_) => TypeId::Float64,
      Self::Decimal32(_) => TypeId::Decimal32,
      Self::Decimal64(_) => TypeId::Decimal64,
      Self::Decimal128(_) => TypeId::Decimal128,
      Self::Str(_) => TypeId::String,
      Self::List(_) => TypeId::List,
      Self::Struct(_) => TypeId::Struct,
    }
  }
}

macro_rules! key_from {
  ($($t:ty => $variant:ident),* $(,)?) => {
    $(
      impl From<$t> for Key<'_> {
        #[inline(always)]
        fn from(v: $t) -> Self {
          Self::$variant(v)
        }
      }
    )*
  };
}

key_from!(
  bool => Bool,
  i8 => I8,
  i16 => I16,
  i32 => I32,
  i64 => I64,
  u8 => U8,
  u16 => U16,
  u32 => U32,
  u64 => U64,
  f32 => F32,
  f64 => F64,
  Decimal32 => Decimal32,
  Decimal64 => Decimal64,
  Decimal128 => Decimal128,
);

impl<'a> From<&'a [u8]> for Key<'a> {
  #[inline(always)]
  fn from(v: &'a [u8]) -> Self {
    Self::Str(v)
  }
}

impl<'a> From<&'a str> for Key<'a> {
  #[inline(always)]
  fn from(v: &'a str) -> Self {
    Self::Str(v.as_bytes())
  }
}
