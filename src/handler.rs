//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写流程以及向用户报告结果。

use crate::cli::{ExtractArgs, HideArgs};
use crate::frame::Mode;
use crate::lsb;
use crate::steganography::{conceal_lsb, conceal_trailer, recover};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 输出文件覆盖保护：目标已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 生成 hide 命令的缺省输出路径：载体同目录下的 doctored_<文件名>。
fn default_hide_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("doctored_{name}"))
}

/// 生成 extract 命令的缺省输出路径：载体同目录下的 recovered_<主干名>.bin。
fn default_extract_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.bin"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体与负载文件、按所选模式调用核心隐写流程，
/// 最后将结果写入目标文件。失败时不产生任何输出文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、模式与密码的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取载体或负载文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 载体容量不足 (LSB 模式)。
/// * 无法写入到目标文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_hide_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let payload = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let password = args.password.as_deref();

    match Mode::from(args.mode) {
        Mode::Lsb => {
            let decoded = image::open(&args.image).with_context(|| {
                format!(
                    "Unable to open carrier image: {}",
                    args.image.to_string_lossy().red().bold()
                )
            })?;
            let mut pixels = decoded.to_rgb8();

            println!(
                "Payload size: {} bytes, carrier capacity: {} bytes",
                payload.len().to_string().green().bold(),
                lsb::capacity_bytes(pixels.width(), pixels.height())
                    .to_string()
                    .green()
                    .bold()
            );

            conceal_lsb(&mut pixels, &payload, password).with_context(|| {
                format!(
                    "Failed to hide the payload in '{}'.",
                    args.image.to_string_lossy().red().bold()
                )
            })?;

            pixels.save(&dest).with_context(|| {
                format!(
                    "Unable to write to target image file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;
        }
        Mode::Trailer => {
            let mut carrier = fs::read(&args.image).with_context(|| {
                format!(
                    "Unable to read carrier file: {}",
                    args.image.to_string_lossy().red().bold()
                )
            })?;

            conceal_trailer(&mut carrier, &payload, password).with_context(|| {
                format!(
                    "Failed to append the payload to '{}'.",
                    args.image.to_string_lossy().red().bold()
                )
            })?;

            fs::write(&dest, carrier).with_context(|| {
                format!(
                    "Unable to write to target file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;
        }
    }

    println!(
        "The payload has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取载体文件、自动探测嵌入模式并恢复负载
/// (如容器已加密则先解密)，最后将负载写入目标文件。
/// 任何失败都发生在写入输出文件之前。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与密码的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取载体文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 载体中没有隐藏数据、帧被截断，或密码缺失/错误。
/// * 无法写入到目标文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_extract_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let carrier = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read carrier file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = recover(&carrier, args.password.as_deref()).with_context(|| {
        format!(
            "Failed to recover hidden data from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, &payload).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The hidden payload ({} bytes) has been successfully recovered and saved: {}",
        payload.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}
