use crate::types::{SiteError, SiteResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ユーザーが追加した記事を保存するキー
pub const USER_ARTICLES_KEY: &str = "userArticles";
/// ユーザーが追加したプロジェクトを保存するキー
pub const USER_PROJECTS_KEY: &str = "userProjects";

/// 1つの閲覧コンテキストに閉じたキー・バリューストアの抽象化トレイト
///
/// 値は常に文字列（シリアライズ済みのJSON）として扱う。
pub trait KeyValueStore {
    /// キーに対応する値を取得する。存在しない場合は`None`
    fn get_item(&self, key: &str) -> SiteResult<Option<String>>;

    /// キーに値を保存する（既存の値は上書き）
    fn set_item(&self, key: &str, value: &str) -> SiteResult<()>;

    /// キーを削除する。存在しない場合は何もしない
    fn remove_item(&self, key: &str) -> SiteResult<()>;
}

/// プロセス内だけで保持するストア（テストや一時的な実行用）
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値を指定してストアを作成
    pub fn with_items<K, V, I>(items: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let items = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: Mutex::new(items),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // 保持しているのは文字列のみなので、poisonedでも中身はそのまま使える
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> SiteResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> SiteResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}

/// 1つのJSONファイルにキー・バリューのマップを永続化するストア
///
/// ファイルが存在しない場合は空のストアとして扱う。
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> SiteResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| SiteError::file_system(self.path_str(), e))?;
        serde_json::from_str(&raw).map_err(|e| {
            SiteError::serialization(format!("ローカルストアの読み込み: {}", self.path_str()), e)
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> SiteResult<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| SiteError::serialization("ローカルストアの書き込み", e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SiteError::file_system(parent.display().to_string(), e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| SiteError::file_system(self.path_str(), e))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> SiteResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> SiteResult<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
