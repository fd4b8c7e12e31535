use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tempfile::tempdir;

use hexwalk::walk;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, b"x").expect("create file");
}

#[test]
fn walk_only_presents_matching_files() {
    // 过滤器匹配完整路径；目录本身永远不会传给回调。
    let temp = tempdir().expect("create temp dir");
    let root = temp.path();

    touch(&root.join("a.txt"));
    touch(&root.join("b.log"));
    touch(&root.join("sub/c.txt"));
    // 名字匹配过滤器的目录也不是候选。
    fs::create_dir_all(root.join("trap.txt")).expect("create trap dir");

    let filter = Regex::new(r"\.txt$").expect("compile filter");
    let mut seen = Vec::new();
    let result = walk(
        root,
        &filter,
        |path| {
            seen.push(path.to_path_buf());
            true
        },
        true,
    );

    assert_eq!(seen, vec![root.join("a.txt"), root.join("sub/c.txt")]);
    assert_eq!(result, seen);
}

#[test]
fn walk_results_follow_lexicographic_order() {
    // 目录内按文件名字典序、深度优先，顺序必须可复现。
    let temp = tempdir().expect("create temp dir");
    let root = temp.path();

    touch(&root.join("z.txt"));
    touch(&root.join("a.txt"));
    touch(&root.join("m/inner.txt"));

    let filter = Regex::new(r"\.txt$").expect("compile filter");
    let result = walk(root, &filter, |_| true, true);

    assert_eq!(
        result,
        vec![
            root.join("a.txt"),
            root.join("m/inner.txt"),
            root.join("z.txt"),
        ]
    );
}

#[test]
fn walk_isolates_callback_failures() {
    // 一个文件失败（回调返回 false），其余文件照常访问并计入结果。
    let temp = tempdir().expect("create temp dir");
    let root = temp.path();

    touch(&root.join("a.txt"));
    touch(&root.join("b.txt"));
    touch(&root.join("sub/c.txt"));

    let filter = Regex::new(r"\.txt$").expect("compile filter");
    let mut visited = Vec::new();
    let result = walk(
        root,
        &filter,
        |path| {
            visited.push(path.to_path_buf());
            !path.ends_with("b.txt")
        },
        true,
    );

    assert_eq!(visited.len(), 3, "failure must not stop the walk");
    assert_eq!(result, vec![root.join("a.txt"), root.join("sub/c.txt")]);
}

#[test]
fn walk_missing_start_path_returns_empty() {
    // 起始路径不存在：返回空列表，不 panic、不报错。
    let filter = Regex::new(".*").expect("compile filter");
    let result = walk(
        Path::new("/does/not/exist"),
        &filter,
        |_| panic!("callback must not run"),
        true,
    );

    assert!(result.is_empty());
}

#[test]
fn walk_empty_directory_returns_empty() {
    let temp = tempdir().expect("create temp dir");
    let filter = Regex::new(".*").expect("compile filter");

    let result = walk(temp.path(), &filter, |_| true, true);
    assert!(result.is_empty());
}

#[test]
fn walk_non_recursive_stays_at_top_level() {
    // recursive = false 时只看直接子项。
    let temp = tempdir().expect("create temp dir");
    let root = temp.path();

    touch(&root.join("top.txt"));
    touch(&root.join("sub/deep.txt"));

    let filter = Regex::new(r"\.txt$").expect("compile filter");
    let result = walk(root, &filter, |_| true, false);

    assert_eq!(result, vec![root.join("top.txt")]);
}

#[cfg(unix)]
#[test]
fn walk_does_not_follow_symlinks() {
    // 符号链接既不下钻也不作为文件候选，循环链接不会造成无限递归。
    use std::os::unix::fs::symlink;

    let temp = tempdir().expect("create temp dir");
    let root = temp.path();

    touch(&root.join("real.txt"));
    symlink(root.join("real.txt"), root.join("link.txt")).expect("create file symlink");
    symlink(root, root.join("loop")).expect("create dir symlink");

    let filter = Regex::new(r"\.txt$").expect("compile filter");
    let result: Vec<PathBuf> = walk(root, &filter, |_| true, true);

    assert_eq!(result, vec![root.join("real.txt")]);
}
