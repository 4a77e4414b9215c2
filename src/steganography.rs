//! # 隐写核心操作模块
//!
//! 封装两种嵌入策略的完整流程：可选加密 → 选择魔数 → 组帧 → 写入载体，
//! 以及提取方向的模式自动探测 (先尾部魔数，后像素 LSB)。

use crate::crypto;
use crate::error::StegoError;
use crate::frame::{self, Magic, Mode};
use crate::lsb;
use crate::surface::PixelSurface;
use crate::trailer;

/// 加密负载 (如提供了非空密码) 并选择相应的魔数。
fn seal(payload: &[u8], mode: Mode, password: Option<&str>) -> Result<(Magic, Vec<u8>), StegoError> {
    match password {
        Some(password) if !password.is_empty() => Ok((
            Magic::select(mode, true),
            crypto::encrypt(payload, password)?,
        )),
        _ => Ok((Magic::select(mode, false), payload.to_vec())),
    }
}

/// 按魔数指示解密负载，或原样返回明文负载。
///
/// 明文容器忽略传入的密码；加密容器缺少密码按密码错误处理。
fn unseal(magic: Magic, stored: Vec<u8>, password: Option<&str>) -> Result<Vec<u8>, StegoError> {
    if !magic.is_encrypted() {
        return Ok(stored);
    }

    match password {
        Some(password) if !password.is_empty() => crypto::decrypt(&stored, password),
        _ => Err(StegoError::InvalidPassword),
    }
}

/// 将负载隐藏进像素表面 (LSB 模式)。
pub fn conceal_lsb<S: PixelSurface>(
    surface: &mut S,
    payload: &[u8],
    password: Option<&str>,
) -> Result<(), StegoError> {
    let (magic, stored) = seal(payload, Mode::Lsb, password)?;
    lsb::embed(surface, &frame::build_lsb(magic, &stored))
}

/// 将负载帧追加到载体字节末尾 (endian/trailer 模式)。
pub fn conceal_trailer(
    carrier: &mut Vec<u8>,
    payload: &[u8],
    password: Option<&str>,
) -> Result<(), StegoError> {
    let (magic, stored) = seal(payload, Mode::Trailer, password)?;
    trailer::append(carrier, magic, &stored);
    Ok(())
}

/// 提取策略，按声明顺序逐一探测。
enum Probe {
    /// 读取文件尾部魔数。
    Trailer,
    /// 解码图像后探测像素低位。
    Lsb,
}

impl Probe {
    /// 对载体字节执行本策略。
    ///
    /// `Ok(None)` 表示本策略未命中，应继续尝试下一个；
    /// `Err` 表示命中了已知魔数但帧本身有问题，属于硬失败。
    fn run(&self, bytes: &[u8]) -> Result<Option<(Magic, Vec<u8>)>, StegoError> {
        match self {
            Probe::Trailer => trailer::probe(bytes),
            Probe::Lsb => match image::load_from_memory(bytes) {
                Ok(decoded) => lsb::extract(&decoded.to_rgb8()),
                // 无法解码为图像的载体不可能含有像素帧
                Err(_) => Ok(None),
            },
        }
    }
}

/// 从载体字节中恢复隐藏的负载，自动探测嵌入模式。
///
/// 两个策略都未命中时返回 [`StegoError::NoHiddenData`]。
pub fn recover(bytes: &[u8], password: Option<&str>) -> Result<Vec<u8>, StegoError> {
    for probe in [Probe::Trailer, Probe::Lsb] {
        if let Some((magic, stored)) = probe.run(bytes)? {
            return unseal(magic, stored, password);
        }
    }

    Err(StegoError::NoHiddenData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_picks_encrypted_magic_only_with_password() {
        let (magic, _) = seal(b"data", Mode::Lsb, None).unwrap();
        assert_eq!(magic, Magic::LsbPlain);

        let (magic, _) = seal(b"data", Mode::Lsb, Some("pw")).unwrap();
        assert_eq!(magic, Magic::LsbEncrypted);

        let (magic, _) = seal(b"data", Mode::Trailer, Some("pw")).unwrap();
        assert_eq!(magic, Magic::TrailerEncrypted);

        // 空密码等同于未提供密码
        let (magic, stored) = seal(b"data", Mode::Trailer, Some("")).unwrap();
        assert_eq!(magic, Magic::TrailerPlain);
        assert_eq!(stored, b"data");
    }

    #[test]
    fn test_trailer_conceal_recover_roundtrip() {
        let mut carrier = vec![0x5C; 256];
        conceal_trailer(&mut carrier, b"in-memory payload", None).unwrap();

        assert_eq!(recover(&carrier, None).unwrap(), b"in-memory payload");
    }

    #[test]
    fn test_encrypted_trailer_roundtrip() {
        let mut carrier = vec![0x5C; 256];
        conceal_trailer(&mut carrier, b"classified", Some("hunter2")).unwrap();

        assert_eq!(recover(&carrier, Some("hunter2")).unwrap(), b"classified");
        assert!(matches!(
            recover(&carrier, Some("hunter3")),
            Err(StegoError::InvalidPassword)
        ));
        assert!(matches!(
            recover(&carrier, None),
            Err(StegoError::InvalidPassword)
        ));
    }

    #[test]
    fn test_password_ignored_for_plaintext_container() {
        let mut carrier = vec![0x00; 64];
        conceal_trailer(&mut carrier, b"open data", None).unwrap();

        assert_eq!(recover(&carrier, Some("whatever")).unwrap(), b"open data");
    }

    #[test]
    fn test_recover_on_random_bytes_is_no_hidden_data() {
        let noise: Vec<u8> = (0..128u32).map(|i| (i * 37 % 251) as u8).collect();
        assert!(matches!(
            recover(&noise, None),
            Err(StegoError::NoHiddenData)
        ));
    }
}
