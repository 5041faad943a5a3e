//! データリソースのモックサーバー
//!
//! このモジュールはhttpmockを使用して記事・プロジェクトのJSONを配信し、
//! 実際のHTTPクライアント経由の読み込みを外部通信なしで検証します。

use folio::app::{load_records, DataSource};
use folio::domain::{default_articles, default_projects, Project};
use folio::infra::api::ReqwestHttpClient;
use folio::infra::storage::{MemoryStorage, USER_PROJECTS_KEY};
use folio::types::{FallbackPolicy, SiteConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};

/// データリソースのモックサーバー
pub struct DataMockServer {
    server: MockServer,
}

impl DataMockServer {
    pub async fn start() -> Self {
        let server = MockServer::start_async().await;
        Self { server }
    }

    /// 指定パスでJSONを返す
    pub async fn mock_json(&self, path: &str, body: serde_json::Value) {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await;
    }

    /// 指定パスで任意のステータスと本文を返す
    pub async fn mock_status(&self, path: &str, status: u16, body: &str) {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(status).body(body);
            })
            .await;
    }

    /// 指定時間待ってからJSONを返す
    pub async fn mock_json_delayed(&self, path: &str, body: serde_json::Value, delay: Duration) {
        self.server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200)
                    .header("content-type", "application/json")
                    .delay(delay)
                    .json_body(body);
            })
            .await;
    }

    /// このサーバーを取得先とする設定
    pub fn config(&self, policy: FallbackPolicy) -> SiteConfig {
        SiteConfig {
            data_base_url: Some(self.server.base_url()),
            fetch_timeout_secs: 5,
            fallback_policy: policy,
            ..SiteConfig::default()
        }
    }
}

fn articles_body() -> serde_json::Value {
    json!([
        {"id": 1, "title": "Served Article", "description": "From the mock", "date": "2024-06-01"},
        {"id": 2, "title": "Second", "description": "Another", "date": "2024-06-02", "content": "body"}
    ])
}

fn projects_body() -> serde_json::Value {
    json!([
        {"id": 1, "title": "Served Project", "description": "Mocked", "technologies": ["Rust"], "github": "https://github.com/example/served"}
    ])
}

#[tokio::test]
async fn test_loads_both_resources_over_http() {
    let server = DataMockServer::start().await;
    server.mock_json("/data/articles.json", articles_body()).await;
    server.mock_json("/data/projects.json", projects_body()).await;

    let (store, report) = load_records(
        &ReqwestHttpClient::new(),
        &MemoryStorage::new(),
        &server.config(FallbackPolicy::Shared),
    )
    .await;

    assert_eq!(report.articles, DataSource::Remote);
    assert_eq!(report.projects, DataSource::Remote);
    assert_eq!(store.articles.len(), 2);
    assert_eq!(store.articles[1].content.as_deref(), Some("body"));
    assert_eq!(
        store.projects[0].live_github(),
        Some("https://github.com/example/served")
    );
}

#[tokio::test]
async fn test_not_found_falls_back_to_catalog() {
    let server = DataMockServer::start().await;
    server.mock_json("/data/articles.json", articles_body()).await;
    server.mock_status("/data/projects.json", 404, "Not Found").await;

    let (store, _) = load_records(
        &ReqwestHttpClient::new(),
        &MemoryStorage::new(),
        &server.config(FallbackPolicy::Shared),
    )
    .await;

    assert_eq!(store.articles, default_articles());
    assert_eq!(store.projects, default_projects());
}

#[tokio::test]
async fn test_per_resource_policy_over_http() {
    let server = DataMockServer::start().await;
    server.mock_status("/data/articles.json", 200, "this is not json").await;
    server.mock_json("/data/projects.json", projects_body()).await;

    let storage = MemoryStorage::with_items([(
        USER_PROJECTS_KEY,
        r#"[{"id":50,"title":"Local","description":"Added by hand"}]"#,
    )]);

    let (store, report) = load_records(
        &ReqwestHttpClient::new(),
        &storage,
        &server.config(FallbackPolicy::PerResource),
    )
    .await;

    assert_eq!(report.articles, DataSource::Default);
    assert_eq!(report.projects, DataSource::Remote);
    assert_eq!(store.articles, default_articles());
    assert_eq!(
        store.projects.iter().map(Project::numeric_id).collect::<Vec<_>>(),
        vec![Some(1), Some(50)]
    );
}

#[tokio::test]
async fn test_unreachable_server_uses_defaults() {
    let config = SiteConfig {
        // 予約済みのポート0には接続できない
        data_base_url: Some("http://127.0.0.1:0".to_string()),
        fetch_timeout_secs: 2,
        ..SiteConfig::default()
    };

    let (store, report) =
        load_records(&ReqwestHttpClient::new(), &MemoryStorage::new(), &config).await;

    assert_eq!(report.articles, DataSource::Default);
    assert_eq!(store.articles, default_articles());
    assert_eq!(store.projects, default_projects());
}

#[tokio::test]
async fn test_slow_resource_times_out() {
    let server = DataMockServer::start().await;
    server
        .mock_json_delayed("/data/articles.json", articles_body(), Duration::from_secs(5))
        .await;
    server.mock_json("/data/projects.json", projects_body()).await;

    let config = SiteConfig {
        fetch_timeout_secs: 1,
        ..server.config(FallbackPolicy::PerResource)
    };

    let started = Instant::now();
    let (store, report) =
        load_records(&ReqwestHttpClient::new(), &MemoryStorage::new(), &config).await;
    let elapsed = started.elapsed();

    assert_eq!(report.articles, DataSource::Default);
    assert_eq!(report.projects, DataSource::Remote);
    assert_eq!(store.articles, default_articles());
    assert!(
        elapsed < Duration::from_secs(4),
        "タイムアウトで打ち切られていない: {:?}",
        elapsed
    );
}
