//! コマンドラインインターフェイス

use crate::calendar::filter_weekdays;
use crate::config::Config;
use crate::export::{default_filename, write_csv};
use crate::parser::{convert, total_amount};
use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Suica利用履歴テキストを交通費申請CSVに変換する
#[derive(Debug, Parser)]
#[command(name = "suica_keihi", version)]
pub struct Args {
    /// 抽出済みの利用履歴テキストファイル
    input: PathBuf,

    /// 設定JSONファイル
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 氏名
    #[arg(long)]
    name: Option<String>,

    /// 対象駅・交通機関（複数指定可。バス事業者名は「バス」を含めること）
    #[arg(long = "station")]
    stations: Vec<String>,

    /// 対象年（省略時は実行年）
    #[arg(long)]
    year: Option<i32>,

    /// 対象月 (1-12)
    #[arg(long)]
    month: Option<u32>,

    /// 除外キーワード（複数指定可）
    #[arg(long = "exclude-keyword")]
    exclude_keywords: Vec<String>,

    /// 土日の記録も含める
    #[arg(long)]
    include_weekends: bool,

    /// 出力CSVファイル（省略時は 交通費申請_{YYYYMMDD}.csv）
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    /// 設定ファイルとコマンドライン指定から実効設定を組み立てる
    ///
    /// コマンドラインの指定が設定ファイルより優先。対象年が未指定なら
    /// 実行日の年を使う
    fn build_config(&self, run_date: NaiveDate) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("設定ファイルを読み込めません: {:?}", path))?,
            None => Config::default(),
        };

        if let Some(ref name) = self.name {
            config.user_name = name.clone();
        }
        if !self.stations.is_empty() {
            config.stations = self.stations.clone();
        }
        if let Some(year) = self.year {
            config.target_year = year;
        }
        if config.target_year == 0 {
            config.target_year = run_date.year();
        }
        if let Some(month) = self.month {
            config.target_month = month;
        }
        if !self.exclude_keywords.is_empty() {
            config.exclude_keywords = self.exclude_keywords.clone();
        }
        if self.include_weekends {
            config.exclude_weekends = false;
        }

        if !(1..=12).contains(&config.target_month) {
            bail!("対象月は1〜12で指定してください: {}", config.target_month);
        }

        Ok(config)
    }
}

/// 変換を実行する
pub fn run(args: &Args, run_date: NaiveDate) -> Result<()> {
    let config = args.build_config(run_date)?;
    info!(
        "対象: {}年{}月, 駅・交通機関: {:?}",
        config.target_year, config.target_month, config.stations
    );

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("入力ファイルを読み込めません: {:?}", args.input))?;

    let mut records = convert(&text, &config);
    if config.exclude_weekends {
        records = filter_weekdays(records, config.target_year, config.target_month);
    }

    if records.is_empty() {
        warn!("対象データが見つかりません（CSVは出力しません）");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}/{} {} {}円",
            record.month, record.day, record.summary, record.amount
        );
    }
    println!("合計: {}円 ({}件)", total_amount(&records), records.len());

    let output = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(default_filename(run_date)),
    };
    write_csv(&output, &records)?;
    info!("CSVを出力しました: {:?}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{ "user_name": "山田花子", "stations": ["渋谷"], "target_month": 4 }"#,
        )
        .unwrap();

        let args = Args::parse_from([
            "suica_keihi",
            "input.txt",
            "--config",
            config_path.to_str().unwrap(),
            "--month",
            "6",
            "--station",
            "戸越",
            "--station",
            "五反",
        ]);
        let config = args.build_config(run_date()).unwrap();

        assert_eq!(config.user_name, "山田花子");
        assert_eq!(config.target_month, 6);
        assert_eq!(config.stations, vec!["戸越", "五反"]);
        assert_eq!(config.target_year, 2025);
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let args = Args::parse_from(["suica_keihi", "input.txt"]);
        let config = args.build_config(run_date()).unwrap();
        assert_eq!(config.user_name, "田中太郎");
        assert_eq!(config.target_month, 5);
        assert_eq!(config.target_year, 2025);
        assert!(config.exclude_weekends);
    }

    #[test]
    fn include_weekends_flag_disables_filter() {
        let args = Args::parse_from(["suica_keihi", "input.txt", "--include-weekends"]);
        let config = args.build_config(run_date()).unwrap();
        assert!(!config.exclude_weekends);
    }

    #[test]
    fn rejects_out_of_range_month() {
        let args = Args::parse_from(["suica_keihi", "input.txt", "--month", "13"]);
        assert!(args.build_config(run_date()).is_err());
    }

    #[test]
    fn end_to_end_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("history.txt");
        let output = dir.path().join("out.csv");
        std::fs::write(
            &input,
            "ご利用履歴\n05 01 入 戸越銀座 出 東急五反 -140\n05 03 入 戸越銀座 出 東急五反 -170\n",
        )
        .unwrap();

        // 2025-05-03 は土曜なので既定設定では除外される
        let args = Args::parse_from([
            "suica_keihi",
            input.to_str().unwrap(),
            "--station",
            "戸越",
            "--station",
            "五反",
            "--year",
            "2025",
            "--month",
            "5",
            "--output",
            output.to_str().unwrap(),
        ]);
        run(&args, run_date()).unwrap();

        let records = crate::export::from_csv_bytes(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, "01");
        assert_eq!(records[0].amount, 140);
    }

    #[test]
    fn empty_result_writes_no_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("history.txt");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "ご利用履歴\n残高 12,345円\n").unwrap();

        let args = Args::parse_from([
            "suica_keihi",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        run(&args, run_date()).unwrap();
        assert!(!output.exists());
    }
}
