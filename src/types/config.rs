use crate::infra::storage::file::load_yaml_from_file;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// 設定関連のエラー型
/// 環境変数、設定ファイル、設定値の検証など設定に関するエラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },

    /// 設定ファイルが見つからない
    #[error("設定ファイルが見つかりません: {path}")]
    MissingConfigFile { path: String },
}

impl ConfigError {
    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// 設定ファイル不足エラーを作成
    pub fn missing_config_file<P: Into<String>>(path: P) -> Self {
        Self::MissingConfigFile { path: path.into() }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// 設定ファイルを明示しなかった場合に探すファイル名
pub const DEFAULT_CONFIG_FILE: &str = "folio.yaml";

/// リソース取得に失敗した場合のデフォルトカタログへの切り替え方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// どちらかのリソースが失敗したら両方をデフォルトカタログに置き換える
    #[default]
    Shared,
    /// 失敗したリソースだけをデフォルトカタログに置き換える
    PerResource,
}

impl FromStr for FallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(Self::Shared),
            "per_resource" | "per-resource" => Ok(Self::PerResource),
            other => Err(ConfigError::invalid_value(format!(
                "不明なフォールバックポリシー: {}",
                other
            ))),
        }
    }
}

/// ページが提供するコンテナのID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerIds {
    pub articles_list: String,
    pub projects_list: String,
    pub latest_articles: String,
    pub featured_projects: String,
    pub search_input: String,
    pub search_results: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            articles_list: "articlesGrid".to_string(),
            projects_list: "projectsGrid".to_string(),
            latest_articles: "latestArticles".to_string(),
            featured_projects: "featuredProjects".to_string(),
            search_input: "searchInput".to_string(),
            search_results: "searchResults".to_string(),
        }
    }
}

/// サイト全体の設定
///
/// 組み込みのデフォルト値 → YAMLファイル → 環境変数 の順に上書きされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// データリソースのベースURL。未設定の場合はローカルファイルから読み込む
    pub data_base_url: Option<String>,
    /// ベースURL未設定時にリソースを探すディレクトリ
    pub data_dir: String,
    pub articles_path: String,
    pub projects_path: String,
    /// ローカル永続ストアのファイルパス
    pub storage_path: String,
    pub fetch_timeout_secs: u64,
    pub fallback_policy: FallbackPolicy,
    pub log_level: String,
    pub containers: ContainerIds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_base_url: None,
            data_dir: ".".to_string(),
            articles_path: "data/articles.json".to_string(),
            projects_path: "data/projects.json".to_string(),
            storage_path: "local_storage.json".to_string(),
            fetch_timeout_secs: 10,
            fallback_policy: FallbackPolicy::Shared,
            log_level: "info".to_string(),
            containers: ContainerIds::default(),
        }
    }
}

impl SiteConfig {
    /// 設定を読み込む
    ///
    /// `path`が指定された場合はそのファイルが必須。未指定の場合は
    /// `folio.yaml`があれば読み込み、なければデフォルト値を使う。
    /// 最後にプロセスの環境変数で上書きする。
    pub fn load(path: Option<&str>) -> ConfigResult<Self> {
        let base = match path {
            Some(p) => {
                if !Path::new(p).exists() {
                    return Err(ConfigError::missing_config_file(p));
                }
                Self::from_yaml_file(p)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_yaml_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// YAMLファイルから設定を読み込む（欠けた項目はデフォルト値）
    pub fn from_yaml_file(path: &str) -> ConfigResult<Self> {
        load_yaml_from_file(path)
            .map_err(|e| ConfigError::invalid_value(format!("{}: {:#}", path, e)))
    }

    /// 環境変数による上書きを適用する
    ///
    /// `lookup`は環境変数名から値を引く関数。テストでは任意のマップを渡せる。
    pub fn with_env_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("FOLIO_DATA_BASE_URL") {
            self.data_base_url = Some(url).filter(|u| !u.trim().is_empty());
        }
        if let Some(dir) = lookup("FOLIO_DATA_DIR") {
            self.data_dir = dir;
        }
        if let Some(path) = lookup("FOLIO_STORAGE_PATH") {
            self.storage_path = path;
        }
        if let Some(secs) = lookup("FOLIO_FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = secs.trim().parse().map_err(|_| {
                ConfigError::invalid_value(format!("FOLIO_FETCH_TIMEOUT_SECS: {}", secs))
            })?;
        }
        if let Some(policy) = lookup("FOLIO_FALLBACK_POLICY") {
            self.fallback_policy = policy.parse()?;
        }
        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "fetch_timeout_secsは1以上である必要があります",
            ));
        }
        if self.articles_path.trim().is_empty() || self.projects_path.trim().is_empty() {
            return Err(ConfigError::invalid_value("リソースのパスが空です"));
        }
        Ok(())
    }

    /// リソースの取得先を組み立てる
    pub fn resource_url(&self, resource_path: &str) -> String {
        match &self.data_base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                resource_path.trim_start_matches('/')
            ),
            None => resource_path.to_string(),
        }
    }
}
