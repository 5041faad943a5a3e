use std::collections::HashMap;

/// 表示するページの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// トップページ（最新記事・注目プロジェクトのプレビュー）
    Home,
    /// 記事一覧
    Articles,
    /// プロジェクト一覧
    Projects,
    /// 検索ページ
    Search,
    Other,
}

/// パスからページの種類を判定する
///
/// `index.html`を含むか`/`ならトップページ。大文字小文字は区別する。
pub fn classify_path(path: &str) -> PageKind {
    if path.contains("index.html") || path == "/" {
        PageKind::Home
    } else if path.contains("articles") {
        PageKind::Articles
    } else if path.contains("projects") {
        PageKind::Projects
    } else if path.contains("search") {
        PageKind::Search
    } else {
        PageKind::Other
    }
}

/// ページ上の要素（子フラグメントの並び）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    children: Vec<String>,
}

impl Container {
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append<F: Into<String>>(&mut self, fragment: F) {
        self.children.push(fragment.into());
    }

    /// 中身を1つのフラグメントで置き換える
    pub fn set_html<F: Into<String>>(&mut self, fragment: F) {
        self.children = vec![fragment.into()];
    }

    pub fn inner_html(&self) -> String {
        self.children.concat()
    }
}

/// ホストページが提供する要素をIDで引けるようにしたもの
///
/// 描画処理はここからコンテナを探し、見つからなければ何もしない。
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<String, Container>,
    inputs: HashMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// 空のコンテナを持つページを作成
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new();
        for id in ids {
            page.add_container(id);
        }
        page
    }

    pub fn add_container<S: Into<String>>(&mut self, id: S) -> &mut Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    pub fn add_input<S: Into<String>>(&mut self, id: S) -> &mut Self {
        self.inputs.entry(id.into()).or_default();
        self
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    /// コンテナの中身。存在しない場合は`None`
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.container(id).map(Container::inner_html)
    }

    /// 入力欄の値を設定する。入力欄が無ければ`false`
    pub fn set_input_value(&mut self, id: &str, value: &str) -> bool {
        match self.inputs.get_mut(id) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }

    /// コンテナIDの一覧（ソート済み）
    pub fn container_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.containers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
