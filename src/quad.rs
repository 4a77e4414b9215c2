//! # 符号编解码模块
//!
//! 字节序列与 quad (2-bit 符号) 序列之间的互相转换。
//! 一个字节按大端位序拆为 4 个 quad (先 bits 7-6，依次到 bits 1-0)。

use crate::constants::{QUAD_MASK, QUADS_PER_BYTE};
use crate::error::StegoError;

/// 将字节序列展开为 quad 序列，并用零 quad 补齐到 `pad_block` 的整数倍。
///
/// 补齐的 quad 不属于负载，提取方必须依据帧头中的长度字段截取真实数据。
pub fn to_quads(bytes: &[u8], pad_block: usize) -> Vec<u8> {
    let mut quads = Vec::with_capacity(bytes.len() * QUADS_PER_BYTE + pad_block);

    for &byte in bytes {
        for shift in [6u32, 4, 2, 0] {
            quads.push((byte >> shift) & QUAD_MASK);
        }
    }

    if pad_block > 1 {
        while quads.len() % pad_block != 0 {
            quads.push(0);
        }
    }

    quads
}

/// 将 quad 序列还原为字节序列，每 4 个 quad 重组一个字节。
///
/// quad 数量不是 4 的整数倍说明帧不完整，返回 [`StegoError::TruncatedFrame`]。
pub fn from_quads(quads: &[u8]) -> Result<Vec<u8>, StegoError> {
    if quads.len() % QUADS_PER_BYTE != 0 {
        return Err(StegoError::TruncatedFrame);
    }

    Ok(quads
        .chunks_exact(QUADS_PER_BYTE)
        .map(|group| group[0] << 6 | group[1] << 4 | group[2] << 2 | group[3])
        .collect())
}
