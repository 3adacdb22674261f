//! Row hashing across columns
//! 跨列的行哈希
//!
//! Murmur3 / Identity: start at the seed and `hash_combine` every element
//! hash (nulls contribute `null_hash`).
//! Spark: chain seeds, each element is hashed with the running hash as seed
//! and nulls leave it unchanged, like Spark's `hash(a, b, ...)`.

use crate::{
  ByteHasher, Key, Result, SparkMurmur3, TryKeyHasher,
  conf::{Algo, Config},
  identity::IdentityHash,
  mix::hash_combine,
  murmur3::Murmur3,
};

/// Hashes rows of nullable keys, one `u32` per row.
/// 对可空键组成的行求哈希，每行一个 u32
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHasher {
  conf: Config,
}

impl Default for RowHasher {
  fn default() -> Self {
    Self::new(Config::default())
  }
}

impl RowHasher {
  #[inline]
  #[must_use]
  pub const fn new(conf: Config) -> Self {
    Self { conf }
  }

  #[inline]
  #[must_use]
  pub const fn conf(&self) -> &Config {
    &self.conf
  }

  /// Hash one row, `None` marks a null element.
  /// 对一行求哈希，None 表示空值
  ///
  /// # Errors
  /// `Error::UnsupportedKeyType` on the first key the algorithm cannot hash.
  pub fn hash_row(&self, row: &[Option<Key<'_>>]) -> Result<u32> {
    match self.conf.algo {
      Algo::Murmur3 => self.combine(&Murmur3::new(self.conf.seed), row),
      Algo::Identity => self.combine(&IdentityHash, row),
      Algo::Spark => {
        let mut h = self.conf.seed;
        for key in row.iter().flatten() {
          h = SparkMurmur3::new(h).try_hash(key)?;
        }
        Ok(h)
      }
    }
  }

  #[inline]
  fn combine<H: TryKeyHasher>(&self, hasher: &H, row: &[Option<Key<'_>>]) -> Result<u32> {
    let mut h = self.conf.seed;
    for key in row {
      let e = match key {
        Some(key) => hasher.try_hash(key)?,
        None => self.conf.null_hash,
      };
      h = hash_combine(h, e);
    }
    Ok(h)
  }

  /// Hash every row into `out`, stopping at the first unsupported key.
  /// 将每行哈希写入 out，遇到第一个不支持的键即停止
  ///
  /// # Errors
  /// `Error::UnsupportedKeyType`, rows before the failing one are already written.
  ///
  /// # Panics
  /// If `rows` and `out` differ in length.
  pub fn hash_rows<'k, R>(&self, rows: &[R], out: &mut [u32]) -> Result<()>
  where
    R: AsRef<[Option<Key<'k>>]>,
  {
    assert_eq!(rows.len(), out.len(), "hash_rows: rows / out length");
    for (o, row) in out.iter_mut().zip(rows) {
      *o = self.hash_row(row.as_ref())?;
    }
    Ok(())
  }
}

/// Convenience for composing a byte hasher over several fields by re-seeding.
/// 通过重新设定种子在多个字段上组合字节哈希
///
/// Each span is hashed with the previous result as seed.
/// 每段以前一个结果作为种子求哈希
#[inline]
pub fn chain_bytes<H: ByteHasher>(hasher: H, fields: &[&[u8]]) -> u32 {
  let mut h = hasher.seed();
  for field in fields {
    h = hasher.with_seed(h).compute_bytes(field);
  }
  h
}
