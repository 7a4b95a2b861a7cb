//! 変換設定モジュール

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定ファイルの読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイルの読み込みに失敗: {0}")]
    Io(#[from] std::io::Error),
    #[error("設定ファイルの解析に失敗: {0}")]
    Json(#[from] serde_json::Error),
}

/// 変換設定
///
/// 対象駅リストには駅名とバス事業者名が混在する。
/// 「バス」を含むエントリはバス事業者として扱われる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 氏名（CSVの「氏名」列にそのまま出力）
    pub user_name: String,
    /// 対象駅・交通機関（駅名またはバス事業者名）
    pub stations: Vec<String>,
    /// 対象年
    pub target_year: i32,
    /// 対象月 (1-12)
    pub target_month: u32,
    /// 土日を除外するか
    pub exclude_weekends: bool,
    /// 除外キーワード（記録に含まれていたら無条件で除外）
    pub exclude_keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "田中太郎".to_string(),
            stations: vec!["五反田".to_string()],
            // 対象年は呼び出し側が実行日から上書きする
            target_year: 0,
            target_month: 5,
            exclude_weekends: true,
            exclude_keywords: vec![
                "物販".to_string(),
                "ｶｰﾄﾞ".to_string(),
                "モバイル".to_string(),
            ],
        }
    }
}

impl Config {
    /// JSONファイルから設定を読み込む（欠けたフィールドはデフォルト値）
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// バス事業者名のみを返す（「バス」を含むエントリ）
    pub fn bus_companies(&self) -> impl Iterator<Item = &str> {
        self.stations
            .iter()
            .filter(|s| s.contains("バス"))
            .map(String::as_str)
    }

    /// 駅名のみを返す（「バス」を含まないエントリ）
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations
            .iter()
            .filter(|s| !s.contains("バス"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.user_name, "田中太郎");
        assert_eq!(config.stations, vec!["五反田"]);
        assert_eq!(config.target_month, 5);
        assert!(config.exclude_weekends);
        assert_eq!(config.exclude_keywords, vec!["物販", "ｶｰﾄﾞ", "モバイル"]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "stations": ["戸越", "東急バス"], "target_month": 6 }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.stations, vec!["戸越", "東急バス"]);
        assert_eq!(config.target_month, 6);
        assert_eq!(config.user_name, "田中太郎");
    }

    #[test]
    fn bus_and_station_split() {
        let config = Config {
            stations: vec!["五反田".into(), "東急バス".into(), "戸越".into()],
            ..Config::default()
        };
        let buses: Vec<&str> = config.bus_companies().collect();
        let stations: Vec<&str> = config.station_names().collect();
        assert_eq!(buses, vec!["東急バス"]);
        assert_eq!(stations, vec!["五反田", "戸越"]);
    }
}
