use crate::domain::decode_records;
use crate::infra::storage::KeyValueStore;
use crate::types::{SiteError, SiteResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// ローカルストアから追加レコードの一覧を読み込む
///
/// キーが存在しないか値が空文字列なら空の一覧を返す。
/// 配列として読めない値はエラー、変換できない要素はその要素だけ読み飛ばす。
pub fn read_overrides<T, S>(storage: &S, key: &str) -> SiteResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match storage.get_item(key)? {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let (records, skipped) =
        decode_records(&raw).map_err(|e| SiteError::malformed_override(key, e))?;
    if skipped > 0 {
        warn!("{}: 解析できない{}件のレコードを読み飛ばしました", key, skipped);
    }
    Ok(records)
}

/// 保存済みレコードの最大ID + 1（整数でないIDは無視する）
pub fn next_override_id<T, S, F>(storage: &S, key: &str, id_of: F) -> SiteResult<i64>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: Fn(&T) -> Option<i64>,
{
    let existing: Vec<T> = read_overrides(storage, key)?;
    existing
        .iter()
        .filter_map(id_of)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| SiteError::id_exhausted(key))
}

/// 追加レコードを既存の一覧の末尾に足して保存する
///
/// 既存の値が壊れている場合は上書きせずにエラーを返す。
pub fn push_override<T, S>(storage: &S, key: &str, record: T) -> SiteResult<usize>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let mut records: Vec<T> = read_overrides(storage, key)?;
    records.push(record);
    let json = serde_json::to_string(&records)
        .map_err(|e| SiteError::serialization(format!("{}の書き込み", key), e))?;
    storage.set_item(key, &json)?;
    Ok(records.len())
}
