//! テキスト解析モジュール - Suica利用履歴から交通費レコードへの変換

mod classify;
mod filter;
mod record;
mod summary;

pub use classify::{Classification, Kind, classify};
pub use filter::{contains_any, is_target};
pub use record::{ParsedEntry, parse_entries, parse_line};
pub use summary::build_summary;

use crate::config::Config;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 支払先は固定
pub const PAYEE: &str = "SUICA";
/// 勘定科目は固定
pub const ACCOUNT: &str = "交通費";

/// 交通費申請の1レコード
///
/// フィールド名は出力CSVの列名（月, 日, 氏名, 支払先, 摘要, 勘定科目名, 金額）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "月")]
    pub month: String,
    #[serde(rename = "日")]
    pub day: String,
    #[serde(rename = "氏名")]
    pub user_name: String,
    #[serde(rename = "支払先")]
    pub payee: String,
    #[serde(rename = "摘要")]
    pub summary: String,
    #[serde(rename = "勘定科目名")]
    pub account: String,
    #[serde(rename = "金額")]
    pub amount: u32,
}

impl ExpenseRecord {
    fn from_entry(entry: &ParsedEntry, summary: String, user_name: &str) -> Self {
        Self {
            month: format!("{:02}", entry.month),
            day: format!("{:02}", entry.day),
            user_name: user_name.to_string(),
            payee: PAYEE.to_string(),
            summary,
            account: ACCOUNT.to_string(),
            amount: entry.amount,
        }
    }
}

/// 利用履歴テキストを交通費レコード列に変換する
///
/// 行の抽出 → 分類 → 対象判定 → 摘要生成 の順で1行ずつ処理する。
/// 出力順は入力テキスト中の出現順。土日除外は含まない
/// （[`crate::calendar::filter_weekdays`] を後段で適用する）。
pub fn convert(text: &str, config: &Config) -> Vec<ExpenseRecord> {
    let entries = parse_entries(text, config.target_month);
    debug!("対象月の記録行: {}件", entries.len());

    entries
        .iter()
        .filter_map(|entry| {
            let classification = classify(&entry.record, &config.stations);
            if !is_target(&entry.record, &classification, config) {
                return None;
            }
            let summary = build_summary(&classification);
            Some(ExpenseRecord::from_entry(entry, summary, &config.user_name))
        })
        .collect()
}

/// レコード列の合計金額
pub fn total_amount(records: &[ExpenseRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.amount)).sum()
}
