//! # 尾部追加模块
//!
//! 不触碰像素的备选策略：把尾部布局的帧原样追加到载体文件字节末尾，
//! 提取时从文件末尾反向读出魔数、长度与负载。

use crate::constants::HEADER_SIZE;
use crate::error::StegoError;
use crate::frame::{self, Magic};

/// 将帧追加到载体字节末尾。
pub fn append(carrier: &mut Vec<u8>, magic: Magic, payload: &[u8]) {
    carrier.extend_from_slice(&frame::build_trailer(magic, payload));
}

/// 探测载体末尾的帧。
///
/// 尾部魔数不在注册表中时返回 `Ok(None)`，调用方应回退到 LSB 探测；
/// 魔数匹配但声明长度超出帧尾之前的字节数时返回 [`StegoError::TruncatedFrame`]。
pub fn probe(bytes: &[u8]) -> Result<Option<(Magic, Vec<u8>)>, StegoError> {
    let Some((magic, length)) = frame::parse_trailer_footer(bytes) else {
        return Ok(None);
    };

    let available = (bytes.len() - HEADER_SIZE) as u64;
    if length > available {
        return Err(StegoError::TruncatedFrame);
    }

    let end = bytes.len() - HEADER_SIZE;
    let start = end - length as usize;
    Ok(Some((magic, bytes[start..end].to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_layout() {
        let mut carrier = vec![0x11, 0x22, 0x33];
        append(&mut carrier, Magic::TrailerPlain, b"hello");

        assert_eq!(&carrier[..3], &[0x11, 0x22, 0x33]);
        assert_eq!(
            &carrier[3..],
            &[
                b'h', b'e', b'l', b'l', b'o', // payload
                0, 0, 0, 0, 0, 0, 0, 5, // length, 大端
                0x5A, 0xFE, 0xC0, 0xDE, // magic
            ]
        );
    }

    #[test]
    fn test_probe_roundtrip() {
        let mut carrier = vec![0xAB; 64];
        append(&mut carrier, Magic::TrailerEncrypted, b"sealed bytes");

        let (magic, payload) = probe(&carrier).unwrap().unwrap();
        assert_eq!(magic, Magic::TrailerEncrypted);
        assert_eq!(payload, b"sealed bytes");
    }

    #[test]
    fn test_probe_empty_payload() {
        let mut carrier = Vec::new();
        append(&mut carrier, Magic::TrailerPlain, &[]);

        let (_, payload) = probe(&carrier).unwrap().unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_probe_unknown_magic_is_miss() {
        let carrier = vec![0x42; 32];
        assert!(probe(&carrier).unwrap().is_none());
    }

    #[test]
    fn test_probe_short_carrier_is_miss() {
        assert!(probe(&[0xC0, 0xDE]).unwrap().is_none());
    }

    #[test]
    fn test_probe_corrupted_magic_is_miss() {
        let mut carrier = vec![0x00; 16];
        append(&mut carrier, Magic::TrailerPlain, b"data");

        let at = carrier.len() - 2;
        carrier[at] ^= 0xFF;
        assert!(probe(&carrier).unwrap().is_none());
    }

    #[test]
    fn test_probe_overlong_length_is_truncated_frame() {
        // 帧尾声明 1000 字节负载，但帧尾之前只有 4 字节
        let mut carrier = vec![0xCD; 4];
        carrier.extend_from_slice(&1000u64.to_be_bytes());
        carrier.extend_from_slice(&Magic::TrailerPlain.value().to_be_bytes());

        let result = probe(&carrier);
        assert!(matches!(result, Err(StegoError::TruncatedFrame)));
    }
}
