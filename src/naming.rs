//! hexwalk 密文文件命名约定。
//!
//! 加密产物 = 原路径 + `.encrypted` 后缀，解密时去掉该后缀。
//! 这是系统中唯一区分「已加密 / 明文」的状态，完全由路径本身承载，
//! 不存在额外索引。
//!
//! 设计要点：
//! - 判定与剥离均锚定在路径末尾，目录名中出现同名 token 不视为标记
//!   （首次出现即剥离的做法存在误伤，这里有意收紧语义）。
//! - `unmarked_path` 对未标记路径保持原样返回。

use std::path::{Path, PathBuf};

/// 密文文件的保留后缀。
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// 路径是否已带密文标记（后缀判定）。
pub fn is_marked(path: &Path) -> bool {
    path.to_string_lossy().ends_with(ENCRYPTED_SUFFIX)
}

/// 计算加密输出路径：原路径追加后缀。
pub fn marked_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(ENCRYPTED_SUFFIX);
    PathBuf::from(name)
}

/// 计算解密输出路径：剥离末尾后缀。
///
/// 剥离后文件名为空（路径恰好等于后缀本身）或路径未带标记时，
/// 原样返回。
pub fn unmarked_path(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_suffix(ENCRYPTED_SUFFIX) {
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => {
            PathBuf::from(stripped)
        }
        _ => path.to_path_buf(),
    }
}
