//! Suica交通費申請CSV変換ツール
//!
//! # 機能
//! - モバイルSuica利用履歴テキストから交通費レコードを抽出
//! - 対象駅・バス事業者・対象月・除外キーワードによるフィルタ
//! - 土日の利用を除外（切替可能）
//! - 交通費申請CSV（BOM付きUTF-8）の出力

pub mod calendar;
pub mod cli;
pub mod config;
pub mod export;
pub mod parser;

pub use config::Config;
pub use parser::ExpenseRecord;
