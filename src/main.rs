//! Suica交通費申請CSV変換ツール - メインエントリポイント

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // ロギング初期化
    tracing_subscriber::fmt::init();

    let args = suica_keihi::cli::Args::parse();

    // 現在日時はここで一度だけ取得して渡す（コアは決定的に保つ）
    let run_date = chrono::Local::now().date_naive();

    suica_keihi::cli::run(&args, run_date)
}
