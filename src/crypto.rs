//! # 加密适配模块
//!
//! 基于密码的对称加密：
//! - HKDF-SHA256 从密码派生 256 位密钥 (固定盐值，保证同一密码派生结果一致)
//! - ChaCha20-Poly1305 认证加密
//!
//! 输出格式为 `nonce(12) || 密文+认证标签`，自描述，无需另行保存元数据。
//! 核心层不解释密文内部结构，只度量其长度。

use chacha20poly1305::{
    ChaCha20Poly1305, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::StegoError;

/// HKDF 的固定盐值。
const HKDF_SALT: &[u8] = b"BYTE-HIDE-SALT-V1";

/// HKDF 的 info 标签。
const HKDF_INFO: &[u8] = b"BYTE-HIDE-SYMMETRIC";

/// ChaCha20-Poly1305 的 nonce 字节数。
const NONCE_SIZE: usize = 12;

/// Poly1305 认证标签的字节数。
const TAG_SIZE: usize = 16;

/// 从密码确定性地派生 256 位对称密钥。
pub fn derive_key(password: &str) -> Result<[u8; 32], StegoError> {
    let hk = Hkdf::<Sha256>::new(Some(HKDF_SALT), password.as_bytes());
    let mut key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut key)
        .map_err(|err| StegoError::EncryptionFailed(err.to_string()))?;
    Ok(key)
}

/// 用密码加密负载，输出 `nonce || 密文+标签`。
pub fn encrypt(payload: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
    let key = derive_key(password)?;
    let cipher = ChaCha20Poly1305::new(&key.into());

    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, payload)
        .map_err(|err| StegoError::EncryptionFailed(err.to_string()))?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(nonce.as_slice());
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// 用密码解密 `nonce || 密文+标签` 形式的数据。
///
/// 密码错误、密文损坏或被截断均返回 [`StegoError::InvalidPassword`]，
/// 绝不返回部分明文。
pub fn decrypt(sealed: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
    // 最短合法输入：12 字节 nonce + 16 字节认证标签
    if sealed.len() < NONCE_SIZE + TAG_SIZE {
        return Err(StegoError::InvalidPassword);
    }

    let key = derive_key(password).map_err(|_| StegoError::InvalidPassword)?;
    let cipher = ChaCha20Poly1305::new(&key.into());

    let nonce = Nonce::from_slice(&sealed[..NONCE_SIZE]);
    cipher
        .decrypt(nonce, &sealed[NONCE_SIZE..])
        .map_err(|_| StegoError::InvalidPassword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let plaintext = b"secret payload bytes";
        let sealed = encrypt(plaintext, "correct horse").unwrap();

        assert_eq!(decrypt(&sealed, "correct horse").unwrap(), plaintext);
    }

    #[test]
    fn test_wrong_password_fails() {
        let sealed = encrypt(b"secret", "right").unwrap();
        let result = decrypt(&sealed, "wrong");

        assert!(matches!(result, Err(StegoError::InvalidPassword)));
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let sealed = encrypt(b"", "pass").unwrap();
        assert_eq!(sealed.len(), NONCE_SIZE + TAG_SIZE);
        assert!(decrypt(&sealed, "pass").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let sealed = encrypt(b"some data", "pass").unwrap();
        let result = decrypt(&sealed[..sealed.len() - 1], "pass");

        assert!(matches!(result, Err(StegoError::InvalidPassword)));
    }

    #[test]
    fn test_too_short_input_fails() {
        let result = decrypt(&[0u8; 10], "pass");
        assert!(matches!(result, Err(StegoError::InvalidPassword)));
    }

    #[test]
    fn test_corrupted_ciphertext_fails() {
        let mut sealed = encrypt(b"authenticated", "pass").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        assert!(matches!(
            decrypt(&sealed, "pass"),
            Err(StegoError::InvalidPassword)
        ));
    }

    #[test]
    fn test_key_derivation_is_deterministic() {
        assert_eq!(
            derive_key("passphrase").unwrap(),
            derive_key("passphrase").unwrap()
        );
        assert_ne!(derive_key("a").unwrap(), derive_key("b").unwrap());
    }
}
