/// 帧头部/尾部的字节数。
/// 由 4 字节魔数与 8 字节大端负载长度组成。
pub const HEADER_SIZE: usize = 12;

/// 每个字节拆分出的 quad (2-bit 符号) 数量。
/// 一个字节 8 bits，每个 quad 承载 2 bits，因此 8 / 2 = 4。
pub const QUADS_PER_BYTE: usize = 4;

/// 每个像素可写入的 quad 数量。
/// RGB 三个通道各承载一个 quad，因此为 3。
pub const QUADS_PER_PIXEL: usize = 3;

/// 帧头部对应的 quad 数量。
/// 12 字节头部 × 每字节 4 个 quad = 48。
pub const HEADER_QUADS: usize = HEADER_SIZE * QUADS_PER_BYTE;

/// 取出单个 quad 的掩码，保留低 2 bits。
pub const QUAD_MASK: u8 = 0b11;

/// 清除通道低 2 bits 的掩码，保留高 6 bits。
pub const CHANNEL_MASK: u8 = 0xFC;
