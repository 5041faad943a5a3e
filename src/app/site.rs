use crate::app::loader::{load_records, LoadReport};
use crate::app::page::{classify_path, Page, PageKind};
use crate::app::presenter::{HtmlPresenter, Presenter};
use crate::app::render::Renderer;
use crate::domain::{search, RecordKind, RecordStore, SearchOutcome};
use crate::infra::api::HttpClient;
use crate::infra::storage::KeyValueStore;
use crate::types::SiteConfig;
use log::{debug, info};

/// 検索を実行するキー
pub const SEARCH_KEY: &str = "Enter";

/// 読み込んだレコードと設定を持ち、ページの描画と検索をまとめて扱う
pub struct Site<P: Presenter = HtmlPresenter> {
    config: SiteConfig,
    store: RecordStore,
    report: LoadReport,
    presenter: P,
}

impl Site<HtmlPresenter> {
    /// HTMLで描画するサイトを読み込む
    pub async fn load<H, S>(config: SiteConfig, client: &H, storage: &S) -> Self
    where
        H: HttpClient + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        Self::load_with_presenter(config, HtmlPresenter, client, storage).await
    }
}

impl<P: Presenter> Site<P> {
    /// 表示形式を指定してサイトを読み込む
    pub async fn load_with_presenter<H, S>(
        config: SiteConfig,
        presenter: P,
        client: &H,
        storage: &S,
    ) -> Self
    where
        H: HttpClient + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let (store, report) = load_records(client, storage, &config).await;
        Self {
            config,
            store,
            report,
            presenter,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn renderer(&self) -> Renderer<'_, P> {
        Renderer::new(&self.presenter, &self.config.containers)
    }

    /// パスからページの種類を判定し、それに応じた内容を描画する
    ///
    /// トップページはプレビュー、一覧ページは全件、それ以外は何もしない。
    pub fn render_page(&self, path: &str, page: &mut Page) -> PageKind {
        let kind = classify_path(path);
        info!("ページ描画: {} ({:?})", path, kind);

        let renderer = self.renderer();
        match kind {
            PageKind::Home => renderer.render_home_preview(&self.store, page),
            PageKind::Articles => renderer.render_list(RecordKind::Article, &self.store, page),
            PageKind::Projects => renderer.render_list(RecordKind::Project, &self.store, page),
            PageKind::Search | PageKind::Other => {}
        }
        kind
    }

    /// 読み込み済みのレコードを検索する
    pub fn search(&self, query: &str) -> SearchOutcome {
        search(query, &self.store.articles, &self.store.projects)
    }

    /// 検索欄の値で検索し、結果コンテナに描画する
    ///
    /// 検索欄か結果コンテナが無いページでは何もしない。
    pub fn perform_search(&self, page: &mut Page) -> Option<SearchOutcome> {
        let ids = &self.config.containers;
        if !page.has_container(&ids.search_results) {
            debug!("検索結果コンテナが無いため検索しません");
            return None;
        }
        let query = page.input_value(&ids.search_input)?.to_string();

        let outcome = self.search(&query);
        debug!("検索語 '{}' の一致件数: {}", query, outcome.match_count());
        self.renderer().render_search(&outcome, page);
        Some(outcome)
    }

    /// 検索欄でのキー入力を処理する。Enterのときだけ検索する
    pub fn handle_key(&self, key: &str, page: &mut Page) -> Option<SearchOutcome> {
        if key == SEARCH_KEY {
            self.perform_search(page)
        } else {
            None
        }
    }
}
