//! hexwalk 单文件解密流程。
//!
//! 流程（严格顺序）：
//! 1. 将源文件整体读入为 hex 文本
//! 2. hex 解码后 CBC 解密
//! 3. 将明文字节写入目标文件
//!
//! 注意：
//! - 源文件不是合法 hex、或填充校验失败，立即报错，
//!   由调用方决定是否继续处理其余文件

use std::fs;
use std::path::Path;

use crate::crypto::{self, CipherConfig};
use crate::error::HexwalkError;

/// 解密单个文件，返回写入目标文件的明文字节。
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    config: &CipherConfig,
) -> Result<Vec<u8>, HexwalkError> {
    let hex_text = fs::read_to_string(input_path)?;
    let plaintext = crypto::decrypt_text(&hex_text, config)?;
    fs::write(output_path, &plaintext)?;
    Ok(plaintext)
}
