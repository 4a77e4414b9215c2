//! # 错误类型模块
//!
//! 定义库内所有隐写操作共享的错误枚举。
//! 处理函数层 (`handler`) 会在此基础上用 `anyhow` 附加上下文信息。

use thiserror::Error;

/// 隐写核心操作可能产生的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 载体图像容量不足以容纳封装后的数据。
    #[error(
        "Not enough space in the carrier image. \nRequired: {required} bytes, Available: {available} bytes"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// 载体中未发现任何已知魔数，即没有隐藏数据。
    #[error("No hidden data found in the carrier")]
    NoHiddenData,

    /// 密码缺失、密码错误，或密文已损坏。
    #[error("Invalid password, or the hidden data is corrupted")]
    InvalidPassword,

    /// 帧声明的负载长度超出了载体实际可提供的数据量。
    #[error("Declared payload length exceeds the data available in the carrier")]
    TruncatedFrame,

    /// 加密阶段失败。
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}
