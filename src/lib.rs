//! hexwalk：目录扫描式批量文件加解密。
//!
//! 给定起始目录、完整路径正则与对称密钥/IV，递归遍历目录树，
//! 将匹配文件逐个加密为旁路 hex 密文（原路径 + `.encrypted`），
//! 或反向解密，并报告本次成功处理的文件列表。

mod decrypt;
mod encrypt;

pub mod algorithm;
pub mod batch;
pub mod crypto;
pub mod error;
pub mod naming;
pub mod walker;

pub use algorithm::{CipherAlgorithm, DEFAULT_ALGORITHM};
pub use batch::{BatchReport, decrypt_tree, decrypt_tree_report, encrypt_tree, encrypt_tree_report};
pub use crypto::CipherConfig;
pub use decrypt::decrypt_file;
pub use encrypt::encrypt_file;
pub use error::HexwalkError;
pub use naming::ENCRYPTED_SUFFIX;
pub use walker::walk;
