//! # LSB 像素嵌入模块
//!
//! 把 quad 序列写入/读出像素通道的低 2 bits。
//! 遍历顺序为行优先：从 (0, 0) 开始，x 先递增，行末换行，
//! 每个像素按 R、G、B 依次消费 3 个 quad。该顺序是线上契约的一部分。

use crate::constants::{CHANNEL_MASK, HEADER_QUADS, QUAD_MASK, QUADS_PER_BYTE, QUADS_PER_PIXEL};
use crate::error::StegoError;
use crate::frame::{self, Magic};
use crate::quad;
use crate::surface::PixelSurface;

/// 给定尺寸的图像可容纳的总字节数：`floor(W * H * 6 / 8)`。
/// 每个像素 3 通道 × 2 bits = 6 bits。
pub fn capacity_bytes(width: u32, height: u32) -> usize {
    width as usize * height as usize * 6 / 8
}

fn write_quad(channel: u8, quad: u8) -> u8 {
    (channel & CHANNEL_MASK) | quad
}

/// 将已组帧的字节序列嵌入像素表面。
///
/// 容量不足时在修改任何像素之前返回 [`StegoError::CapacityExceeded`]。
pub fn embed<S: PixelSurface>(surface: &mut S, frame_bytes: &[u8]) -> Result<(), StegoError> {
    let available = capacity_bytes(surface.width(), surface.height());
    if frame_bytes.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: frame_bytes.len(),
            available,
        });
    }

    let quads = quad::to_quads(frame_bytes, QUADS_PER_PIXEL);
    let width = surface.width();

    for (pixel_index, group) in quads.chunks_exact(QUADS_PER_PIXEL).enumerate() {
        let x = pixel_index as u32 % width;
        let y = pixel_index as u32 / width;

        let (r, g, b) = surface.get(x, y);
        surface.set(
            x,
            y,
            (
                write_quad(r, group[0]),
                write_quad(g, group[1]),
                write_quad(b, group[2]),
            ),
        );
    }

    Ok(())
}

/// 按行优先顺序读出 `[start, start + count)` 范围内的 quad。
fn read_quads<S: PixelSurface>(surface: &S, start: usize, count: usize) -> Vec<u8> {
    let width = surface.width() as usize;

    (start..start + count)
        .map(|quad_index| {
            let pixel_index = quad_index / QUADS_PER_PIXEL;
            let x = (pixel_index % width) as u32;
            let y = (pixel_index / width) as u32;

            let (r, g, b) = surface.get(x, y);
            [r, g, b][quad_index % QUADS_PER_PIXEL] & QUAD_MASK
        })
        .collect()
}

/// 从像素低位中探测并提取隐藏帧。
///
/// 先读出 48 个头部 quad 还原 12 字节帧头；魔数不匹配时返回 `Ok(None)`
/// (此载体不含像素帧，调用方可继续其它策略)。魔数匹配后校验声明长度
/// 不超过剩余像素容量，再精确读出 `4 * length` 个负载 quad。
pub fn extract<S: PixelSurface>(surface: &S) -> Result<Option<(Magic, Vec<u8>)>, StegoError> {
    let total_quads = surface.width() as usize * surface.height() as usize * QUADS_PER_PIXEL;
    if total_quads < HEADER_QUADS {
        return Ok(None);
    }

    let header = quad::from_quads(&read_quads(surface, 0, HEADER_QUADS))?;
    let Some((magic, length)) = frame::parse_lsb_header(&header) else {
        return Ok(None);
    };

    // 先用载体容量约束声明长度，再分配负载缓冲区
    let remaining = (total_quads - HEADER_QUADS) as u64;
    let payload_quads = length
        .checked_mul(QUADS_PER_BYTE as u64)
        .filter(|&needed| needed <= remaining)
        .ok_or(StegoError::TruncatedFrame)?;

    let payload = quad::from_quads(&read_quads(surface, HEADER_QUADS, payload_quads as usize))?;
    Ok(Some((magic, payload)))
}
