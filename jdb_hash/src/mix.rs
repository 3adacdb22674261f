//! MurmurHash3 x86_32 block-mixing core shared by every byte hash.
//! 所有字节哈希共享的 MurmurHash3 x86_32 块混合核心
//!
//! Reference: https://github.com/aappleby/smhasher/blob/master/src/MurmurHash3.cpp

pub const C1: u32 = 0xcc9e_2d51;
pub const C2: u32 = 0x1b87_3593;
pub const C3: u32 = 0xe654_6b64;

const ROT_K: u32 = 15;
const ROT_H: u32 = 13;

/// Scramble one 32-bit word before it enters the state.
/// 在并入状态前打散一个 32 位字
#[inline(always)]
pub const fn mix_k1(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(ROT_K).wrapping_mul(C2)
}

/// Fold a scrambled word into the running state.
/// 将打散后的字折叠进运行状态
#[inline(always)]
pub const fn mix_h1(h: u32, k: u32) -> u32 {
  (h ^ k).rotate_left(ROT_H).wrapping_mul(5).wrapping_add(C3)
}

/// Length fold plus avalanche finalizer.
/// 长度折叠与雪崩终结
#[inline(always)]
pub const fn fmix(mut h: u32, len: u32) -> u32 {
  h ^= len;
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Mix every full 4-byte block, returning the state and the 0..=3 tail bytes.
/// 混合所有完整的 4 字节块，返回状态与 0..=3 个尾字节
///
/// Blocks are read as little-endian words through byte copies, so `data`
/// may start at any address.
/// 块通过字节拷贝按小端读取，data 可以从任意地址开始
#[inline(always)]
pub fn blocks(seed: u32, data: &[u8]) -> (u32, &[u8]) {
  let chunks = data.chunks_exact(4);
  let tail = chunks.remainder();
  let mut h = seed;
  for c in chunks {
    h = mix_h1(h, mix_k1(u32::from_le_bytes([c[0], c[1], c[2], c[3]])));
  }
  (h, tail)
}

/// 32-bit hash combine (boost `hash_combine` with the golden ratio constant).
/// 32 位哈希组合（boost hash_combine，黄金比例常数）
#[inline(always)]
#[must_use]
pub const fn hash_combine(lhs: u32, rhs: u32) -> u32 {
  lhs
    ^ rhs
      .wrapping_add(0x9e37_79b9)
      .wrapping_add(lhs << 6)
      .wrapping_add(lhs >> 2)
}
