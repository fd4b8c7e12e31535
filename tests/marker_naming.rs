use std::path::{Path, PathBuf};

use hexwalk::naming::{is_marked, marked_path, unmarked_path};

#[test]
fn marked_then_unmarked_is_identity() {
    // 未带标记的路径：加标记再去标记必须还原。
    for raw in ["a.txt", "dir/b.log", "/abs/path/c.bin", "no_extension"] {
        let path = PathBuf::from(raw);
        assert_eq!(unmarked_path(&marked_path(&path)), path);
    }
}

#[test]
fn mark_is_appended_as_suffix() {
    assert_eq!(
        marked_path(Path::new("dir/a.txt")),
        PathBuf::from("dir/a.txt.encrypted")
    );
}

#[test]
fn is_marked_is_anchored_at_the_end() {
    // 只有后缀判定生效，目录名里出现 token 不算标记。
    assert!(is_marked(Path::new("a.txt.encrypted")));
    assert!(!is_marked(Path::new("a.txt")));
    assert!(!is_marked(Path::new("backup.encrypted/a.txt")));
    assert!(!is_marked(Path::new("a.txt.encrypted.bak")));
}

#[test]
fn unmark_only_strips_a_trailing_suffix() {
    // 中间出现的 token 保留原样；未带标记的路径原样返回。
    assert_eq!(
        unmarked_path(Path::new("backup.encrypted/a.txt.encrypted")),
        PathBuf::from("backup.encrypted/a.txt")
    );
    assert_eq!(
        unmarked_path(Path::new("plain.txt")),
        PathBuf::from("plain.txt")
    );
}

#[test]
fn unmark_keeps_degenerate_names_intact() {
    // 剥离后会得到空文件名的路径不做剥离。
    assert_eq!(
        unmarked_path(Path::new(".encrypted")),
        PathBuf::from(".encrypted")
    );
}
