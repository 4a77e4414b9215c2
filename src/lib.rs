//! # byte_hide 库
//!
//! 本库包含双模式隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod frame;
pub mod handler;
pub mod lsb;
pub mod quad;
pub mod steganography;
pub mod surface;
pub mod trailer;
