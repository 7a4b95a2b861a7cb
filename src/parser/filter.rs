//! 対象記録の判定モジュール

use super::classify::{Classification, Kind};
use crate::config::Config;

/// text が candidates のいずれかを部分文字列として含むか
///
/// 駅名・キーワードの照合はすべてこの部分一致ポリシーに統一する
pub fn contains_any<'a, I>(text: &str, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().any(|c| text.contains(c))
}

/// 記録を対象に含めるかどうかを判定する
///
/// 除外キーワードが最優先。その後は種別ごとの判定:
/// - バス: 対象リストのバス事業者名が記録に含まれていること
/// - 駅間移動: 起点・終点の両方が対象駅名を含むこと（AND条件）
/// - その他: 記録が対象リストのいずれかを含むこと
pub fn is_target(record: &str, classification: &Classification, config: &Config) -> bool {
    if contains_any(record, config.exclude_keywords.iter().map(String::as_str)) {
        return false;
    }

    match classification.kind {
        Kind::Bus => classification.matched_company.is_some(),
        Kind::Transit => {
            let from_ok = classification
                .from_station
                .as_deref()
                .is_some_and(|from| contains_any(from, config.station_names()));
            let to_ok = classification
                .to_station
                .as_deref()
                .is_some_and(|to| contains_any(to, config.station_names()));
            from_ok && to_ok
        }
        Kind::Other => contains_any(record, config.stations.iter().map(String::as_str)),
    }
}
