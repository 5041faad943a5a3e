use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};

/// 日付として解釈できなかった場合に表示する文字列
pub const INVALID_DATE: &str = "Invalid Date";

/// 文字列を暦日に変換するヘルパー関数
///
/// まず`YYYY-MM-DD`として厳密に解析し、失敗した場合は`dateparser`で
/// 様々な形式の日付文字列を解析してUTCの日付部分を取り出す。
///
/// # サポート形式の例
/// - "2024-01-15"
/// - "2024-01-15T10:00:00Z"
/// - "Mon, 15 Jan 2024 10:00:00 +0000"
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    match dateparser::parse(trimmed) {
        Ok(dt) => Ok(dt.with_timezone(&Utc).date_naive()),
        Err(_) => Err(anyhow!("不正な日付形式: {}", date_str)),
    }
}

/// 日付文字列を表示用の長い形式（例: "January 15, 2024"）に変換する
///
/// 解析できない場合はエラーにせず`"Invalid Date"`を返す。
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
