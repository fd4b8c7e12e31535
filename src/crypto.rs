//! hexwalk 对称加解密模块
//!
//! 本模块基于 AES-CBC + PKCS#7 实现字节缓冲的加解密，
//! 密文统一以小写 hex 文本形式表示。
//!
//! 功能说明：
//! - 加密：明文字节 → CBC 密文 → hex 字符串
//! - 解密：hex 字符串 → CBC 密文 → 明文字节
//! - 解密失败即表示：密钥 / IV 不匹配 或 输入不是本工具产生的密文
//!
//! 安全约束：
//! - 密钥 / IV 长度必须与算法严格一致，长度不符立即报错
//! - CBC 不提供完整性校验，填充校验失败是唯一的错误信号

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::CipherAlgorithm;
use crate::error::HexwalkError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// 一次批量操作所使用的全部密码学材料。
///
/// 显式传入每个操作，不存在任何全局密钥状态；
/// 密钥与 IV 在离开作用域后自动清零。
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherConfig {
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
    #[zeroize(skip)]
    pub algorithm: CipherAlgorithm,
}

impl CipherConfig {
    pub fn new(key: Vec<u8>, iv: Vec<u8>, algorithm: CipherAlgorithm) -> Self {
        Self { key, iv, algorithm }
    }

    /// 校验密钥 / IV 长度与算法一致。
    ///
    /// 长度不符是配置错误，属于加解密层的硬失败。
    pub fn validate(&self) -> Result<(), HexwalkError> {
        let expected_key = self.algorithm.key_len();
        if self.key.len() != expected_key {
            return Err(HexwalkError::InvalidKeyLength {
                expected: expected_key,
                actual: self.key.len(),
            });
        }

        let expected_iv = self.algorithm.iv_len();
        if self.iv.len() != expected_iv {
            return Err(HexwalkError::InvalidIvLength {
                expected: expected_iv,
                actual: self.iv.len(),
            });
        }

        Ok(())
    }
}

/// 加密一段明文字节，返回 hex 编码的密文字符串。
pub fn encrypt_text(plaintext: &[u8], config: &CipherConfig) -> Result<String, HexwalkError> {
    config.validate()?;

    // 长度已校验通过，new_from_slices 失败只可能是内部不一致。
    let ciphertext = match config.algorithm {
        CipherAlgorithm::Aes256Cbc => Aes256CbcEnc::new_from_slices(&config.key, &config.iv)
            .map_err(|_| HexwalkError::Internal)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        CipherAlgorithm::Aes128Cbc => Aes128CbcEnc::new_from_slices(&config.key, &config.iv)
            .map_err(|_| HexwalkError::Internal)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
    };

    Ok(hex::encode(ciphertext))
}

/// 解密一段 hex 编码的密文字符串，返回明文字节。
///
/// 输入允许带首尾空白（文件末尾换行等）。
pub fn decrypt_text(hex_text: &str, config: &CipherConfig) -> Result<Vec<u8>, HexwalkError> {
    config.validate()?;

    let ciphertext = hex::decode(hex_text.trim())
        .map_err(|e| HexwalkError::MalformedCiphertext(format!("invalid hex: {e}")))?;

    let plaintext = match config.algorithm {
        CipherAlgorithm::Aes256Cbc => Aes256CbcDec::new_from_slices(&config.key, &config.iv)
            .map_err(|_| HexwalkError::Internal)?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext),
        CipherAlgorithm::Aes128Cbc => Aes128CbcDec::new_from_slices(&config.key, &config.iv)
            .map_err(|_| HexwalkError::Internal)?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext),
    }
    .map_err(|_| HexwalkError::MalformedCiphertext("bad block padding".to_string()))?;

    Ok(plaintext)
}
