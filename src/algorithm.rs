//! hexwalk 对称算法标识模块。
//!
//! 统一管理可选算法与算法标识字符串，
//! 密钥 / IV 的合法长度均由算法本身定义。

use std::fmt;

use crate::error::HexwalkError;

/// 支持的对称分组密码算法（均为 CBC 模式 + PKCS#7 填充）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    Aes256Cbc,
    Aes128Cbc,
}

impl CipherAlgorithm {
    pub const AES_256_CBC_ID: &'static str = "aes-256-cbc";
    pub const AES_128_CBC_ID: &'static str = "aes-128-cbc";

    /// 从自由格式的算法标识字符串解析。
    ///
    /// 未知标识返回 `UnknownAlgorithm`，不做猜测。
    pub fn from_name(name: &str) -> Result<Self, HexwalkError> {
        match name {
            Self::AES_256_CBC_ID => Ok(Self::Aes256Cbc),
            Self::AES_128_CBC_ID => Ok(Self::Aes128Cbc),
            other => Err(HexwalkError::UnknownAlgorithm(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aes256Cbc => Self::AES_256_CBC_ID,
            Self::Aes128Cbc => Self::AES_128_CBC_ID,
        }
    }

    /// 该算法要求的密钥长度（字节）。
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes256Cbc => 32,
            Self::Aes128Cbc => 16,
        }
    }

    /// 该算法要求的 IV 长度（字节），等于 AES 分组大小。
    pub fn iv_len(self) -> usize {
        16
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 默认算法：AES-256-CBC。
pub const DEFAULT_ALGORITHM: CipherAlgorithm = CipherAlgorithm::Aes256Cbc;
