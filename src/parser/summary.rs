//! 摘要生成モジュール

use super::classify::{Classification, Kind};

/// 採用された記録の摘要文字列を生成する
///
/// - バス: 一致したバス事業者名（取れなければ「バス」）
/// - 駅間移動: "起点 -> 終点"（どちらか欠ける場合は「移動」）
/// - その他: 「交通費」
pub fn build_summary(classification: &Classification) -> String {
    match classification.kind {
        Kind::Bus => classification
            .matched_company
            .clone()
            .unwrap_or_else(|| "バス".to_string()),
        Kind::Transit => match (&classification.from_station, &classification.to_station) {
            (Some(from), Some(to)) => format!("{} -> {}", from, to),
            _ => "移動".to_string(),
        },
        Kind::Other => "交通費".to_string(),
    }
}
