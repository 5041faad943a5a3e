use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// HTTP応答（ステータスコードと本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new<B: Into<String>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xxのステータスかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTPクライアントの抽象化トレイト
///
/// このトレイトは、実際のHTTP通信・同梱ファイルの読み込み・モック実装を
/// 統一的に扱えるようにするためのインターフェースです。
/// 通信自体の失敗は`Err`、成功以外のステータスは`Ok`で返します。
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// 指定されたURLからリソースを取得する
    ///
    /// # Arguments
    /// * `url` - 取得対象のURL
    /// * `timeout_secs` - タイムアウト時間（秒）
    async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<HttpResponse>;
}

/// `reqwest` を使用した本番用のHTTPクライアント実装
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// 新しいHTTPクライアントを作成
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .context(format!("HTTPリクエストの送信に失敗: {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("レスポンステキストの取得に失敗")?;

        Ok(HttpResponse { status, body })
    }
}

/// 同梱データをディレクトリから読み込むクライアント
///
/// 静的サーバーと同じく、ファイルが存在しなければ404を返す。
pub struct FileHttpClient {
    root: PathBuf,
}

impl FileHttpClient {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl HttpClient for FileHttpClient {
    async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<HttpResponse> {
        let path = self.root.join(url.trim_start_matches('/'));
        let read = tokio::fs::read_to_string(&path);

        match tokio::time::timeout(Duration::from_secs(timeout_secs), read).await {
            Err(_) => Err(anyhow::anyhow!(
                "ファイル読み込みがタイムアウトしました: {}",
                path.display()
            )),
            Ok(Ok(body)) => Ok(HttpResponse::new(200, body)),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(HttpResponse::new(404, ""))
            }
            Ok(Err(e)) => {
                Err(e).context(format!("ファイルの読み込みに失敗: {}", path.display()))
            }
        }
    }
}

/// モックが返す応答
#[derive(Debug, Clone)]
enum MockReply {
    Response(HttpResponse),
    Error(String),
}

/// テスト用のモックHTTPクライアント
///
/// この実装はテスト時にDIされ、実際のHTTPリクエストを行わずに
/// URLごとに定義済みのレスポンスやエラーを返します。
/// 登録されていないURLには既定の応答（なければエラー）を返します。
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: HashMap<String, MockReply>,
    fallback: Option<MockReply>,
    requested: Mutex<Vec<String>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全てのURLに成功レスポンスを返すモッククライアントを作成
    pub fn new_success(mock_response: &str) -> Self {
        Self {
            fallback: Some(MockReply::Response(HttpResponse::new(200, mock_response))),
            ..Self::default()
        }
    }

    /// 全てのURLでエラーを返すモッククライアントを作成
    pub fn new_error(error_message: &str) -> Self {
        Self {
            fallback: Some(MockReply::Error(error_message.to_string())),
            ..Self::default()
        }
    }

    /// 指定URLの応答を登録する
    pub fn with_response(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            MockReply::Response(HttpResponse::new(status, body)),
        );
        self
    }

    /// 指定URLで通信エラーを返すよう登録する
    pub fn with_error(mut self, url: &str, error_message: &str) -> Self {
        self.routes
            .insert(url.to_string(), MockReply::Error(error_message.to_string()));
        self
    }

    /// これまでに要求されたURLの一覧
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn fetch(&self, url: &str, _timeout_secs: u64) -> Result<HttpResponse> {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.to_string());
        }

        match self.routes.get(url).or(self.fallback.as_ref()) {
            Some(MockReply::Response(response)) => Ok(response.clone()),
            Some(MockReply::Error(message)) => {
                Err(anyhow::anyhow!("モックHTTPエラー: {}", message))
            }
            None => Err(anyhow::anyhow!("モックHTTPエラー: 未登録のURL {}", url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_http_client_success() {
        let mock_client = MockHttpClient::new_success(r#"[{"id":1}]"#);

        let response = mock_client
            .fetch("data/articles.json", 30)
            .await
            .unwrap();

        assert!(response.is_success());
        assert!(response.body.contains(r#""id":1"#));
    }

    #[tokio::test]
    async fn test_mock_http_client_error() {
        let mock_client = MockHttpClient::new_error("接続失敗");

        let result = mock_client.fetch("data/articles.json", 30).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("接続失敗"));
    }

    #[tokio::test]
    async fn test_mock_http_client_routes() {
        let mock_client = MockHttpClient::new()
            .with_response("data/articles.json", 404, "")
            .with_error("data/projects.json", "切断");

        let articles = mock_client.fetch("data/articles.json", 30).await.unwrap();
        assert_eq!(articles.status, 404);
        assert!(!articles.is_success());

        assert!(mock_client.fetch("data/projects.json", 30).await.is_err());
        assert!(mock_client.fetch("data/other.json", 30).await.is_err());

        assert_eq!(
            mock_client.requested_urls(),
            vec!["data/articles.json", "data/projects.json", "data/other.json"]
        );
    }

    #[tokio::test]
    async fn test_file_http_client() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/articles.json"), "[]").unwrap();

        let client = FileHttpClient::new(dir.path());

        let found = client.fetch("data/articles.json", 5).await.unwrap();
        assert_eq!(found, HttpResponse::new(200, "[]"));

        let missing = client.fetch("data/projects.json", 5).await.unwrap();
        assert_eq!(missing.status, 404);
    }
}
