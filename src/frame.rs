//! # 容器组帧模块
//!
//! 负责魔数注册表以及 magic + length + payload 信封的构造与解析。
//! 两种布局共用 12 字节的头部/尾部：LSB 模式为 `magic || length || payload`，
//! 尾部追加模式为 `payload || length || magic`，所有整数均为大端。

use crate::constants::HEADER_SIZE;

/// 嵌入模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 将数据写入像素通道的低 2 bits。
    Lsb,
    /// 将数据帧追加到载体文件末尾。
    Trailer,
}

/// 魔数注册表：四个固定标签，区分 模式 × 是否加密。
///
/// 构造与解析双向共用同一来源，避免常量与查找表漂移。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magic {
    /// LSB 模式，明文负载。
    LsbPlain,
    /// LSB 模式，加密负载。
    LsbEncrypted,
    /// 尾部追加模式，明文负载。
    TrailerPlain,
    /// 尾部追加模式，加密负载。
    TrailerEncrypted,
}

/// 注册表中的全部魔数。
const REGISTRY: [Magic; 4] = [
    Magic::LsbPlain,
    Magic::LsbEncrypted,
    Magic::TrailerPlain,
    Magic::TrailerEncrypted,
];

impl Magic {
    /// 魔数的 32 位值。
    pub const fn value(self) -> u32 {
        match self {
            Magic::LsbPlain => 0xDEAD_C0DE,
            Magic::LsbEncrypted => 0x1337_C0DE,
            Magic::TrailerPlain => 0x5AFE_C0DE,
            Magic::TrailerEncrypted => 0xBABE_C0DE,
        }
    }

    /// 反向查找：由 32 位值得到注册表项，未注册的值返回 `None`。
    pub fn from_value(raw: u32) -> Option<Self> {
        REGISTRY.into_iter().find(|magic| magic.value() == raw)
    }

    /// 魔数对应的嵌入模式。
    pub const fn mode(self) -> Mode {
        match self {
            Magic::LsbPlain | Magic::LsbEncrypted => Mode::Lsb,
            Magic::TrailerPlain | Magic::TrailerEncrypted => Mode::Trailer,
        }
    }

    /// 负载是否为加密形式。
    pub const fn is_encrypted(self) -> bool {
        matches!(self, Magic::LsbEncrypted | Magic::TrailerEncrypted)
    }

    /// 按 (模式, 是否加密) 选择构造时使用的魔数。
    pub const fn select(mode: Mode, encrypted: bool) -> Self {
        match (mode, encrypted) {
            (Mode::Lsb, false) => Magic::LsbPlain,
            (Mode::Lsb, true) => Magic::LsbEncrypted,
            (Mode::Trailer, false) => Magic::TrailerPlain,
            (Mode::Trailer, true) => Magic::TrailerEncrypted,
        }
    }
}

/// 构造 LSB 布局的帧：`magic(4) || length(8) || payload`。
pub fn build_lsb(magic: Magic, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&magic.value().to_be_bytes());
    frame.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// 构造尾部追加布局的帧：`payload || length(8) || magic(4)`。
pub fn build_trailer(magic: Magic, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + HEADER_SIZE);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    frame.extend_from_slice(&magic.value().to_be_bytes());
    frame
}

/// 解析 LSB 帧头：前 4 字节为魔数，随后 8 字节为负载长度。
///
/// 只接受 LSB 模式的魔数，其余情况返回 `None`。
pub fn parse_lsb_header(header: &[u8]) -> Option<(Magic, u64)> {
    if header.len() < HEADER_SIZE {
        return None;
    }

    let raw = u32::from_be_bytes(header[0..4].try_into().ok()?);
    let magic = Magic::from_value(raw).filter(|magic| magic.mode() == Mode::Lsb)?;
    let length = u64::from_be_bytes(header[4..HEADER_SIZE].try_into().ok()?);

    Some((magic, length))
}

/// 解析尾部帧尾：最后 4 字节为魔数，再往前 8 字节为负载长度。
///
/// 只接受尾部追加模式的魔数，其余情况返回 `None`。
pub fn parse_trailer_footer(bytes: &[u8]) -> Option<(Magic, u64)> {
    if bytes.len() < HEADER_SIZE {
        return None;
    }

    let magic_at = bytes.len() - 4;
    let length_at = bytes.len() - HEADER_SIZE;

    let raw = u32::from_be_bytes(bytes[magic_at..].try_into().ok()?);
    let magic = Magic::from_value(raw).filter(|magic| magic.mode() == Mode::Trailer)?;
    let length = u64::from_be_bytes(bytes[length_at..magic_at].try_into().ok()?);

    Some((magic, length))
}
