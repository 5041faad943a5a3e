use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// リンクが「無い」ことを表すプレースホルダー値
pub const NO_LINK_SENTINEL: &str = "#";

/// レコードの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Article,
    Project,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Article => write!(f, "Article"),
            RecordKind::Project => write!(f, "Project"),
        }
    }
}

/// レコードのID
///
/// 描画にも検索にも使わないため、数値でも文字列でもそのまま受け入れる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RecordId {
    /// 整数として解釈できるID（`"2"`のような数字の文字列も含む）
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RecordId::Number(n) => Some(*n),
            RecordId::Text(s) => s.trim().parse().ok(),
            RecordId::Other(_) => None,
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
            RecordId::Other(v) => write!(f, "{}", v),
        }
    }
}

// 記事エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`形式の日付。表示時にのみ解析する
    #[serde(default)]
    pub date: String,
    /// 本文（どの描画経路でも使わない）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// プロジェクトエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    /// 使用技術。欠落・nullの場合は空
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON配列をレコードの一覧に変換する
///
/// 配列でなければエラー。要素単位で変換できなかったものは読み飛ばし、
/// 残りのレコードと読み飛ばした件数を返す。
pub fn decode_records<T: DeserializeOwned>(raw: &str) -> serde_json::Result<(Vec<T>, usize)> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    let skipped = total - records.len();
    Ok((records, skipped))
}

/// 空文字列とプレースホルダー`"#"`を「リンク無し」として扱う
fn live(link: &Option<String>) -> Option<&str> {
    link.as_deref()
        .filter(|l| !l.is_empty() && *l != NO_LINK_SENTINEL)
}

impl Article {
    /// 整数として解釈できるID
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(RecordId::as_number)
    }
}

impl Project {
    /// 整数として解釈できるID
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(RecordId::as_number)
    }

    /// 公開先リンク（無い場合は`None`）
    pub fn live_link(&self) -> Option<&str> {
        live(&self.link)
    }

    /// GitHubリンク（無い場合は`None`）
    pub fn live_github(&self) -> Option<&str> {
        live(&self.github)
    }
}

/// タイトルか説明文に検索語が含まれるかを判定するためのトレイト
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// `needle`は小文字化済みであること
    fn matches(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
            || self.description().to_lowercase().contains(needle)
    }
}

impl Searchable for Article {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Searchable for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// ページ表示中に保持する記事とプロジェクトの一覧
///
/// 順序は読み込み順（取得元またはデフォルト → ローカル保存分）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    pub articles: Vec<Article>,
    pub projects: Vec<Project>,
}

impl RecordStore {
    pub fn new(articles: Vec<Article>, projects: Vec<Project>) -> Self {
        Self { articles, projects }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.projects.is_empty()
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Article => self.articles.len(),
            RecordKind::Project => self.projects.len(),
        }
    }
}
