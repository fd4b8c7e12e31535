//! hexwalk 目录遍历核心。
//!
//! 设计要点：
//! - 深度优先遍历，目录内条目按文件名字典序排序，保证结果可复现。
//! - 过滤正则匹配的是完整路径字符串，而非仅文件名。
//! - 回调返回 true 才视为该文件处理成功；回调自行兜住内部错误，
//!   单个文件失败不得中断整棵树的遍历。
//! - 不跟随符号链接：指向目录的链接不会被当作目录下钻，
//!   避免循环链接导致无限递归。

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

/// 遍历 `start` 下的文件树，对每个完整路径匹配 `filter` 的
/// 普通文件调用 `callback`，返回回调报告成功的路径列表。
///
/// - 起始路径不存在：记录告警并返回空列表，不视为致命错误。
/// - `recursive` 为 false 时只枚举直接子项。
/// - 目录本身永远不会传给回调；遍历中无法读取的条目跳过并告警。
pub fn walk<F>(start: &Path, filter: &Regex, mut callback: F, recursive: bool) -> Vec<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    let mut processed = Vec::new();

    if start.symlink_metadata().is_err() {
        warn!(path = %start.display(), "path not found");
        return processed;
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(start)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        // 只有普通文件才是候选；目录与符号链接本身不参与匹配。
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !filter.is_match(&path.to_string_lossy()) {
            continue;
        }

        // 成功与否只看回调返回值。
        if callback(path) {
            processed.push(path.to_path_buf());
        }
    }

    processed
}
