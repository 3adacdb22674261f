//! Hashing pass configuration
//! 哈希过程配置

use crate::{DEFAULT_SEED, NULL_HASH, SPARK_SEED, row::RowHasher};

/// Hash algorithm / 哈希算法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algo {
  /// MurmurHash3 x86_32
  #[default]
  Murmur3,
  /// Spark `hash()` compatible / 兼容 Spark hash()
  Spark,
  /// Key bits passthrough / 键位直通
  Identity,
}

impl Algo {
  /// Seed used when none is configured / 未配置时使用的种子
  #[must_use]
  pub const fn default_seed(self) -> u32 {
    match self {
      Self::Spark => SPARK_SEED,
      Self::Murmur3 | Self::Identity => DEFAULT_SEED,
    }
  }
}

/// Hashing options
/// 哈希选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Seed bound for the whole pass, default per algorithm
  /// 整个过程绑定的种子，默认值随算法而定
  Seed(u32),
  /// Algorithm, default Murmur3
  /// 算法，默认 Murmur3
  Algo(Algo),
  /// Element hash standing in for null, default `u32::MAX` (ignored by Spark,
  /// which skips nulls)
  /// 空值的元素哈希，默认 u32::MAX（Spark 跳过空值，忽略此项）
  NullHash(u32),
}

/// Resolved configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub algo: Algo,
  pub seed: u32,
  pub null_hash: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      algo: Algo::default(),
      seed: DEFAULT_SEED,
      null_hash: NULL_HASH,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    let mut seed = None;
    for &conf in conf_li {
      match conf {
        Conf::Seed(v) => seed = Some(v),
        Conf::Algo(v) => config.algo = v,
        Conf::NullHash(v) => config.null_hash = v,
      }
    }
    config.seed = seed.unwrap_or(config.algo.default_seed());
    config
  }
}

impl Config {
  #[must_use]
  pub fn row_hasher(&self) -> RowHasher {
    log::debug!(
      "row hasher {:?} seed={} null_hash={:#x}",
      self.algo,
      self.seed,
      self.null_hash
    );
    RowHasher::new(*self)
  }
}
