use crate::app::overrides::read_overrides;
use crate::domain::{
    decode_records, default_articles, default_projects, Article, Project, RecordStore,
};
use crate::infra::api::HttpClient;
use crate::infra::storage::{KeyValueStore, USER_ARTICLES_KEY, USER_PROJECTS_KEY};
use crate::types::{FallbackPolicy, SiteConfig, SiteError, SiteResult};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

/// 一覧の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// リソースから取得できた
    Remote,
    /// デフォルトカタログで置き換えた
    Default,
}

/// 読み込み処理の結果の要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub articles: DataSource,
    pub projects: DataSource,
    /// 末尾に追加したローカル保存レコードの件数
    pub overrides_appended: usize,
    /// 解析できずに読み飛ばしたストアのキー
    pub overrides_skipped: Vec<String>,
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "読み込み完了: 記事={:?}、プロジェクト={:?}、追加{}件、スキップ{}件",
            self.articles,
            self.projects,
            self.overrides_appended,
            self.overrides_skipped.len()
        )
    }
}

/// 1つのリソースを取得して一覧に変換する
///
/// 通信エラーと配列として読めない本文は`RetrievalFailure`、
/// 成功以外のステータスは`NonSuccessResponse`になる。
/// 変換できない要素はその要素だけ読み飛ばす。
async fn fetch_collection<T, H>(client: &H, url: &str, timeout_secs: u64) -> SiteResult<Vec<T>>
where
    T: DeserializeOwned,
    H: HttpClient + ?Sized,
{
    let response = client
        .fetch(url, timeout_secs)
        .await
        .map_err(|e| SiteError::retrieval_failure(url, e))?;

    if !response.is_success() {
        return Err(SiteError::non_success(url, response.status));
    }

    let (records, skipped) = decode_records(&response.body)
        .map_err(|e| SiteError::retrieval_failure(url, anyhow::Error::new(e)))?;
    if skipped > 0 {
        warn!("{}: 解析できない{}件のレコードを読み飛ばしました", url, skipped);
    }
    Ok(records)
}

/// 取得結果とポリシーから基本の一覧を決める
fn choose_base(
    articles: SiteResult<Vec<Article>>,
    projects: SiteResult<Vec<Project>>,
    policy: FallbackPolicy,
) -> (Vec<Article>, Vec<Project>, DataSource, DataSource) {
    for err in [articles.as_ref().err(), projects.as_ref().err()]
        .into_iter()
        .flatten()
    {
        warn!("リソース取得エラー: {}", err);
    }

    match policy {
        FallbackPolicy::Shared => match (articles, projects) {
            (Ok(a), Ok(p)) => (a, p, DataSource::Remote, DataSource::Remote),
            _ => {
                warn!("デフォルトデータで両方の一覧を置き換えます");
                (
                    default_articles(),
                    default_projects(),
                    DataSource::Default,
                    DataSource::Default,
                )
            }
        },
        FallbackPolicy::PerResource => {
            let (articles, article_source) = match articles {
                Ok(a) => (a, DataSource::Remote),
                Err(_) => {
                    warn!("記事一覧をデフォルトデータで置き換えます");
                    (default_articles(), DataSource::Default)
                }
            };
            let (projects, project_source) = match projects {
                Ok(p) => (p, DataSource::Remote),
                Err(_) => {
                    warn!("プロジェクト一覧をデフォルトデータで置き換えます");
                    (default_projects(), DataSource::Default)
                }
            };
            (articles, projects, article_source, project_source)
        }
    }
}

/// ローカルストアの追加レコードを一覧の末尾に足す
///
/// 読み込みや解析に失敗した場合はその種類だけ読み飛ばし、ロード全体は続ける。
fn append_overrides<T, S>(
    records: &mut Vec<T>,
    storage: &S,
    key: &str,
    report: &mut LoadReport,
) where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match read_overrides::<T, S>(storage, key) {
        Ok(extra) => {
            debug!("{}: {}件の追加レコード", key, extra.len());
            report.overrides_appended += extra.len();
            records.extend(extra);
        }
        Err(e) => {
            warn!("保存済みレコードを読み飛ばします: {}", e);
            report.overrides_skipped.push(key.to_string());
        }
    }
}

/// 記事とプロジェクトを読み込む（依存性を注入）
///
/// 1. 2つのリソースを並行して取得
/// 2. 失敗時はポリシーに従ってデフォルトカタログで置き換え
/// 3. ローカルストアの追加レコードを末尾に追加
pub async fn load_records<H, S>(
    client: &H,
    storage: &S,
    config: &SiteConfig,
) -> (RecordStore, LoadReport)
where
    H: HttpClient + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let articles_url = config.resource_url(&config.articles_path);
    let projects_url = config.resource_url(&config.projects_path);
    let timeout = config.fetch_timeout_secs;

    let (articles, projects) = tokio::join!(
        fetch_collection::<Article, H>(client, &articles_url, timeout),
        fetch_collection::<Project, H>(client, &projects_url, timeout),
    );

    let (mut articles, mut projects, article_source, project_source) =
        choose_base(articles, projects, config.fallback_policy);

    let mut report = LoadReport {
        articles: article_source,
        projects: project_source,
        overrides_appended: 0,
        overrides_skipped: Vec::new(),
    };

    append_overrides(&mut articles, storage, USER_ARTICLES_KEY, &mut report);
    append_overrides(&mut projects, storage, USER_PROJECTS_KEY, &mut report);

    info!("{}", report);
    (RecordStore::new(articles, projects), report)
}
