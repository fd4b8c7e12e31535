//! hexwalk 批量加密/解密调度。
//!
//! 设计要点：
//! - 将单文件加解密与命名约定绑定成遍历回调，交给 walker 驱动。
//! - 单个文件失败只记录日志并计入失败列表，绝不中断整棵树。
//! - 加密产物写在源文件旁（原路径 + `.encrypted`），源文件保留：
//!   中途失败不会破坏唯一的明文副本，重跑是安全的。
//! - 对已带密文标记的文件直接跳过，重复运行不会二次加密。

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{info, warn};

use crate::crypto::CipherConfig;
use crate::decrypt::decrypt_file;
use crate::encrypt::encrypt_file;
use crate::error::HexwalkError;
use crate::naming;
use crate::walker;

/// 一次批量运行的完整结果。
///
/// `succeeded` 是本次新产生的输出文件路径，按遍历顺序排列；
/// `failed` 记录每个失败文件及其原因。
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, HexwalkError)>,
}

/// 加密 `start` 下所有完整路径匹配 `filter` 的文件。
///
/// 返回本次新创建的密文文件路径列表。
pub fn encrypt_tree(
    start: &Path,
    filter: &Regex,
    config: &CipherConfig,
    recursive: bool,
) -> Vec<PathBuf> {
    encrypt_tree_report(start, filter, config, recursive).succeeded
}

/// 同 [`encrypt_tree`]，但同时返回失败文件及原因。
pub fn encrypt_tree_report(
    start: &Path,
    filter: &Regex,
    config: &CipherConfig,
    recursive: bool,
) -> BatchReport {
    let mut report = BatchReport::default();

    let sources = walker::walk(
        start,
        filter,
        |path| {
            // 已是密文的文件跳过，避免加密自己的输出。
            if naming::is_marked(path) {
                info!(path = %path.display(), "already encrypted, skipping");
                return false;
            }

            let target = naming::marked_path(path);
            match encrypt_file(path, &target, config) {
                Ok(_) => true,
                Err(err) => {
                    warn!(path = %path.display(), "encrypt failed: {err}");
                    report.failed.push((path.to_path_buf(), err));
                    false
                }
            }
        },
        recursive,
    );

    report.succeeded = sources.iter().map(|p| naming::marked_path(p)).collect();
    report
}

/// 解密 `start` 下所有完整路径匹配 `filter` 的文件。
///
/// 不预先检查密文标记：匹配了 `filter` 但并非本工具产物的文件
/// 会在解密步骤失败，按单文件失败记录。
/// 返回本次写出的明文文件路径列表。
pub fn decrypt_tree(
    start: &Path,
    filter: &Regex,
    config: &CipherConfig,
    recursive: bool,
) -> Vec<PathBuf> {
    decrypt_tree_report(start, filter, config, recursive).succeeded
}

/// 同 [`decrypt_tree`]，但同时返回失败文件及原因。
pub fn decrypt_tree_report(
    start: &Path,
    filter: &Regex,
    config: &CipherConfig,
    recursive: bool,
) -> BatchReport {
    let mut report = BatchReport::default();

    let sources = walker::walk(
        start,
        filter,
        |path| {
            let target = naming::unmarked_path(path);
            match decrypt_file(path, &target, config) {
                Ok(_) => true,
                Err(err) => {
                    warn!(path = %path.display(), "decrypt failed: {err}");
                    report.failed.push((path.to_path_buf(), err));
                    false
                }
            }
        },
        recursive,
    );

    report.succeeded = sources.iter().map(|p| naming::unmarked_path(p)).collect();
    report
}
