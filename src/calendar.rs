//! 月間カレンダーモジュール - 土日の計算と除外

use crate::parser::ExpenseRecord;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// 指定月の日数（うるう年対応）
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("有効な年月");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("有効な年月");
    next.signed_duration_since(first).num_days() as u32
}

/// 指定月の土日の日付集合を返す
pub fn weekends_of_month(year: i32, month: u32) -> HashSet<u32> {
    (1..=days_in_month(year, month))
        .filter(|&day| {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("有効な日付");
            // 月曜始まりで 5=土, 6=日
            date.weekday().num_days_from_monday() >= 5
        })
        .collect()
}

fn digits_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// 「日」フィールドから日付の数値を取り出す
/// 数字が見つからない場合は 1（平日扱い）に倒す
fn day_number(day_field: &str) -> u32 {
    digits_pattern()
        .find(day_field)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// 土日のレコードを除外する。相対順序は維持
pub fn filter_weekdays(
    records: Vec<ExpenseRecord>,
    year: i32,
    month: u32,
) -> Vec<ExpenseRecord> {
    let weekends = weekends_of_month(year, month);
    records
        .into_iter()
        .filter(|r| !weekends.contains(&day_number(&r.day)))
        .collect()
}
