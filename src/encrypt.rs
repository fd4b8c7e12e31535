//! hexwalk 单文件加密流程。
//!
//! 流程（严格顺序）：
//! 1. 整体读入源文件字节
//! 2. CBC 加密并 hex 编码
//! 3. 将 hex 字符串写入目标文件
//!
//! 注意：
//! - 不做流式 / 分块处理，超大文件不在性能保证范围内
//! - 不负责目录遍历与后缀命名，调用方决定目标路径

use std::fs;
use std::path::Path;

use crate::crypto::{self, CipherConfig};
use crate::error::HexwalkError;

/// 加密单个文件，返回写入目标文件的 hex 密文。
///
/// 源文件保留原样，加密产物写到 `output_path`。
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    config: &CipherConfig,
) -> Result<String, HexwalkError> {
    let plaintext = fs::read(input_path)?;
    let encoded = crypto::encrypt_text(&plaintext, config)?;
    fs::write(output_path, &encoded)?;
    Ok(encoded)
}
