//! hexwalk 命令行入口。
//!
//! 用法：
//!   hexwalk encrypt <START_PATH> <FILTER> --iv <IV> [--key <KEY>]
//!   hexwalk decrypt <START_PATH> <FILTER> --iv <IV> [--key <KEY>]
//!
//! 设计原则：
//! - 密钥 / IV 按惯例补零或截断到算法要求的字节长度
//! - 未通过参数提供密钥时转为交互式输入，避免密钥进 shell 历史
//! - 所有实际逻辑都委托给库层，入口只做参数整形与结果打印

use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use hexwalk::{BatchReport, CipherAlgorithm, CipherConfig};

#[derive(Parser)]
#[command(name = "hexwalk", version, about = "Recursively encrypt or decrypt matching files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt all matching files under a directory
    Encrypt(WalkArgs),
    /// Decrypt all matching files under a directory
    Decrypt(WalkArgs),
}

#[derive(Args)]
struct WalkArgs {
    /// Directory to walk
    start_path: PathBuf,

    /// Regular expression matched against each full file path
    filter: String,

    /// Key material (padded/truncated to the algorithm's key size);
    /// prompted interactively when omitted
    #[arg(short, long)]
    key: Option<String>,

    /// IV material (padded/truncated to the algorithm's IV size)
    #[arg(short, long)]
    iv: String,

    /// Cipher algorithm identifier
    #[arg(short, long, default_value = CipherAlgorithm::AES_256_CBC_ID)]
    algorithm: String,

    /// Only process direct children of the start path
    #[arg(long)]
    no_recursive: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match cli.command {
        Command::Encrypt(args) => {
            let (filter, config, recursive) = prepare(&args)?;
            hexwalk::encrypt_tree_report(&args.start_path, &filter, &config, recursive)
        }
        Command::Decrypt(args) => {
            let (filter, config, recursive) = prepare(&args)?;
            hexwalk::decrypt_tree_report(&args.start_path, &filter, &config, recursive)
        }
    };

    print_report(&report);

    if !report.failed.is_empty() {
        exit(1);
    }
    Ok(())
}

/// 将 CLI 参数整形为库层需要的过滤正则与密码学配置。
fn prepare(args: &WalkArgs) -> anyhow::Result<(Regex, CipherConfig, bool)> {
    let filter = Regex::new(&args.filter).context("invalid filter pattern")?;

    let algorithm = CipherAlgorithm::from_name(&args.algorithm)?;

    let key_material = match &args.key {
        Some(key) => key.clone(),
        None => rpassword::prompt_password("Key: ").context("failed to read key")?,
    };

    let key = pad_to_len(&key_material, algorithm.key_len());
    let iv = pad_to_len(&args.iv, algorithm.iv_len());

    Ok((
        filter,
        CipherConfig::new(key, iv, algorithm),
        !args.no_recursive,
    ))
}

/// 按惯例将输入材料补零 / 截断到指定字节长度。
fn pad_to_len(material: &str, len: usize) -> Vec<u8> {
    let mut bytes = material.as_bytes().to_vec();
    bytes.resize(len, 0);
    bytes
}

fn print_report(report: &BatchReport) {
    for path in &report.succeeded {
        println!("{}", path.display());
    }

    if !report.failed.is_empty() {
        eprintln!(
            "{} file(s) failed, see log output for details",
            report.failed.len()
        );
    }
}
