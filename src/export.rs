//! CSV出力モジュール

use crate::parser::ExpenseRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// UTF-8 BOM。Excelで開いたときの文字化け対策
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// レコード列をBOM付きUTF-8のCSVバイト列にする
///
/// 列順: 月, 日, 氏名, 支払先, 摘要, 勘定科目名, 金額（ヘッダ行あり）
pub fn to_csv_bytes(records: &[ExpenseRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::from(BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records {
            writer
                .serialize(record)
                .context("CSVレコードの書き込みに失敗")?;
        }
        writer.flush().context("CSVの書き出しに失敗")?;
    }
    Ok(buf)
}

/// CSVバイト列をレコード列に読み戻す（BOMの有無は問わない）
pub fn from_csv_bytes(bytes: &[u8]) -> Result<Vec<ExpenseRecord>> {
    let body = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let mut reader = csv::Reader::from_reader(body);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ExpenseRecord = result.context("CSVレコードの読み込みに失敗")?;
        records.push(record);
    }
    Ok(records)
}

/// レコード列をCSVファイルに書き出す
pub fn write_csv(path: impl AsRef<Path>, records: &[ExpenseRecord]) -> Result<()> {
    let bytes = to_csv_bytes(records)?;
    std::fs::write(path.as_ref(), bytes)
        .with_context(|| format!("CSVファイルの書き込みに失敗: {:?}", path.as_ref()))?;
    Ok(())
}

/// 既定の出力ファイル名: 交通費申請_{YYYYMMDD}.csv（実行日付き）
pub fn default_filename(run_date: NaiveDate) -> String {
    format!("交通費申請_{}.csv", run_date.format("%Y%m%d"))
}
