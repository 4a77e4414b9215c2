//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::frame::Mode;

/// 一款双模式命令行隐写工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取任意文件，支持密码加密。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款双模式命令行隐写工具，可将任意文件写入无损格式图像 (如 PNG, BMP) 的像素低位 (lsb 模式) 或追加到载体文件末尾 (endian 模式)，并支持用密码加密负载。提取时自动识别嵌入模式。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将负载文件隐藏进载体图像。
    Hide(HideArgs),

    /// 从载体中提取隐藏的负载 (自动识别嵌入模式)。
    Extract(ExtractArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 载体图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的负载文件路径。
    #[arg(short, long)]
    pub file: PathBuf,

    /// 隐藏完成后保存结果的输出路径；缺省时在载体同目录生成 doctored_ 前缀文件。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 嵌入模式。
    #[arg(short, long, value_enum, default_value = "lsb")]
    pub mode: ModeArg,

    /// 负载加密密码；提供后负载以加密形式存储。
    #[arg(short, long)]
    pub password: Option<String>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 含有隐藏数据的载体文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复负载后保存内容的输出路径；缺省时生成 recovered_ 前缀文件。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 解密密码 (提取加密容器时必须提供)。
    #[arg(short, long)]
    pub password: Option<String>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 命令行上的嵌入模式取值。
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    /// 写入像素通道的低 2 bits。
    Lsb,
    /// 将数据帧追加到载体文件末尾。
    #[value(name = "endian", alias = "trailer")]
    Endian,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Lsb => Mode::Lsb,
            ModeArg::Endian => Mode::Trailer,
        }
    }
}
