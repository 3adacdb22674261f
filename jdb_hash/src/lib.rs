#![cfg_attr(docsrs, feature(doc_cfg))]

//! # jdb_hash - Key hashing for columnar engines
//! 列式引擎的键哈希
//!
//! Deterministic, stateless 32-bit hash functors evaluated once per element
//! for joins, group-by, partitioning and shuffles.
//! 确定性、无状态的 32 位哈希函子，按元素求值，用于连接、分组、分区与混洗。
//!
//! | Functor | Use |
//! |---------|-----|
//! | [`Murmur3`] | MurmurHash3 x86_32 over canonical key bytes |
//! | [`SparkMurmur3`] | bit-exact with Spark `hash()` for cross-system partitions |
//! | [`IdentityHash`] | key bits passthrough for pre-hashed arithmetic keys |
//!
//! ```rust
//! use jdb_hash::{Conf, Config, Algo, Key, KeyHasher, Murmur3};
//!
//! // Typed: resolved at compile time
//! // 类型化：编译期解析
//! let h = Murmur3::default();
//! assert_eq!(h.hash(f64::NAN), h.hash(-f64::NAN));
//!
//! // Rows of nullable keys
//! // 可空键组成的行
//! let rows = Config::from(&[Conf::Algo(Algo::Spark)][..]).row_hasher();
//! let row = [Some(Key::I32(1)), None, Some(Key::from("a"))];
//! assert_eq!(rows.hash_row(&row).unwrap() as i32, -936062819);
//! ```

pub mod canonical;
pub mod conf;
pub mod decimal;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod key;
pub mod mix;
pub mod murmur3;
pub mod row;
pub mod spark;

pub use conf::{Algo, Conf, Config};
pub use decimal::{Decimal32, Decimal64, Decimal128};
pub use dispatch::{ByteHasher, HashKey, KeyHasher, TryKeyHasher, hash_batch};
pub use error::{Error, Result};
pub use identity::IdentityHash;
pub use key::{Key, TypeId, check_hashable};
pub use mix::hash_combine;
pub use murmur3::Murmur3;
pub use row::{RowHasher, chain_bytes};
pub use spark::SparkMurmur3;

/// Hash value / 哈希值
pub type HashValue = u32;

/// Library default seed / 库默认种子
pub const DEFAULT_SEED: u32 = 0;

/// Seed of Spark's `hash()` expression / Spark hash() 表达式的种子
pub const SPARK_SEED: u32 = 42;

/// Element hash of a null in combined row hashes / 组合行哈希中空值的元素哈希
pub const NULL_HASH: u32 = u32::MAX;
