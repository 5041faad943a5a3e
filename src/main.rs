use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::app::{next_override_id, push_override, Page, Presenter, Site, TextPresenter};
use folio::domain::{Article, Project};
use folio::infra::api::{FileHttpClient, HttpClient, ReqwestHttpClient};
use folio::infra::logging::init_logging;
use folio::infra::storage::{FileStorage, USER_ARTICLES_KEY, USER_PROJECTS_KEY};
use folio::types::SiteConfig;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "個人サイトの記事・プロジェクトを描画・検索するCLI")]
struct Cli {
    /// 設定ファイル（未指定なら folio.yaml があれば使用）
    #[arg(long, global = true)]
    config: Option<String>,
    /// HTMLではなくテキストで出力する
    #[arg(long, global = true, default_value_t = false)]
    text: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// パスに対応するページを描画する
    Render { path: String },
    /// 記事とプロジェクトを検索する
    Search { query: String },
    /// ローカルストアに記事を追加する
    AddArticle {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// ローカルストアにプロジェクトを追加する
    AddProject {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long = "tech")]
        technologies: Vec<String>,
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        github: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラーが発生しました: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = SiteConfig::load(cli.config.as_deref()).context("設定の読み込みに失敗")?;
    init_logging(&config.log_level).map_err(anyhow::Error::msg)?;

    let storage = FileStorage::new(&config.storage_path);
    let client: Box<dyn HttpClient> = match &config.data_base_url {
        Some(_) => Box::new(ReqwestHttpClient::new()),
        None => Box::new(FileHttpClient::new(&config.data_dir)),
    };

    match cli.command {
        Commands::Render { path } => {
            if cli.text {
                let site =
                    Site::load_with_presenter(config, TextPresenter, &*client, &storage)
                        .await;
                print_page(&site, &path);
            } else {
                let site = Site::load(config, &*client, &storage).await;
                print_page(&site, &path);
            }
        }
        Commands::Search { query } => {
            if cli.text {
                let site =
                    Site::load_with_presenter(config, TextPresenter, &*client, &storage)
                        .await;
                print_search(&site, &query);
            } else {
                let site = Site::load(config, &*client, &storage).await;
                print_search(&site, &query);
            }
        }
        Commands::AddArticle {
            title,
            description,
            date,
        } => {
            let id = next_override_id(&storage, USER_ARTICLES_KEY, Article::numeric_id)?;
            let article = Article {
                id: Some(id.into()),
                title,
                description,
                date,
                content: None,
            };
            let count = push_override(&storage, USER_ARTICLES_KEY, article)?;
            println!("記事を追加しました（保存済み{}件）", count);
        }
        Commands::AddProject {
            title,
            description,
            technologies,
            link,
            github,
        } => {
            let id = next_override_id(&storage, USER_PROJECTS_KEY, Project::numeric_id)?;
            let project = Project {
                id: Some(id.into()),
                title,
                description,
                technologies,
                link,
                github,
            };
            let count = push_override(&storage, USER_PROJECTS_KEY, project)?;
            println!("プロジェクトを追加しました（保存済み{}件）", count);
        }
    }
    Ok(())
}

fn print_page<P: Presenter>(site: &Site<P>, path: &str) {
    let ids = &site.config().containers;
    let mut page = Page::with_containers([
        ids.articles_list.as_str(),
        ids.projects_list.as_str(),
        ids.latest_articles.as_str(),
        ids.featured_projects.as_str(),
    ]);

    let kind = site.render_page(path, &mut page);
    println!("=== {} ({:?}) ===", path, kind);
    for id in page.container_ids() {
        let html = page.inner_html(id).unwrap_or_default();
        if !html.is_empty() {
            println!("--- #{} ---", id);
            println!("{}", html);
        }
    }
}

fn print_search<P: Presenter>(site: &Site<P>, query: &str) {
    let ids = &site.config().containers;
    let mut page = Page::with_containers([ids.search_results.as_str()]);
    page.add_input(ids.search_input.as_str());
    page.set_input_value(&ids.search_input, query);

    site.perform_search(&mut page);
    println!("{}", page.inner_html(&ids.search_results).unwrap_or_default());
}
