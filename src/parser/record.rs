//! 利用記録行の抽出モジュール

use regex::Regex;
use std::sync::OnceLock;

/// 利用記録1行分の解析結果
///
/// 例: "05 01 入 戸越銀座 出 東急五反 -140"
/// → month=5, day=1, record="入 戸越銀座 出 東急五反", amount=140
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub month: u32,
    pub day: u32,
    /// 日付と金額の間の自由テキスト部分
    pub record: String,
    /// 金額（絶対値、円）
    pub amount: u32,
}

/// 利用記録行のパターン
/// "MM DD <記録> -1,234" 形式。金額は負号付き・カンマ区切りあり
fn record_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{2})\s+(\d{2})\s+(.+?)\s+(-\d{1,3}(?:,\d{3})*)$").unwrap()
    })
}

/// 1行を利用記録として解析する
///
/// 形式に合わない行（残高表示、ヘッダなど）は None。
/// 金額は負号とカンマを除去した絶対値で返す。
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    let caps = record_pattern().captures(line.trim())?;

    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let record = caps.get(3)?.as_str().to_string();
    let amount: u32 = caps
        .get(4)?
        .as_str()
        .replace(['-', ','], "")
        .parse()
        .ok()?;

    Some(ParsedEntry {
        month,
        day,
        record,
        amount,
    })
}

/// テキスト全体から対象月の利用記録を行順に抽出する
pub fn parse_entries(text: &str, target_month: u32) -> Vec<ParsedEntry> {
    text.lines()
        .filter_map(parse_line)
        .filter(|entry| entry.month == target_month)
        .collect()
}
