use crate::domain::{Article, Project, RecordKind, SearchOutcome};
use crate::infra::parser::format_date;

/// トップページに表示するプレビューの最大件数
pub const HOME_PREVIEW_LIMIT: usize = 3;

/// プロジェクトカードのリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub date: String,
    pub description: String,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            date: format_date(&article.date),
            description: article.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// 0〜2件（"View Project" → "GitHub" の順）
    pub links: Vec<ActionLink>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let links = [
            ("View Project", project.live_link()),
            ("GitHub", project.live_github()),
        ]
        .into_iter()
        .filter_map(|(label, href)| {
            href.map(|href| ActionLink {
                label,
                href: href.to_string(),
            })
        })
        .collect();

        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePreview {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPreview {
    pub title: String,
    pub description: String,
}

/// 先頭から最大3件の記事プレビュー
pub fn article_previews(articles: &[Article]) -> Vec<ArticlePreview> {
    articles
        .iter()
        .take(HOME_PREVIEW_LIMIT)
        .map(|article| ArticlePreview {
            title: article.title.clone(),
            date: format_date(&article.date),
        })
        .collect()
}

/// 先頭から最大3件のプロジェクトプレビュー
pub fn project_previews(projects: &[Project]) -> Vec<ProjectPreview> {
    projects
        .iter()
        .take(HOME_PREVIEW_LIMIT)
        .map(|project| ProjectPreview {
            title: project.title.clone(),
            description: project.description.clone(),
        })
        .collect()
}

/// 検索結果の1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub kind: RecordKind,
    pub title: String,
    /// 記事のみ
    pub date: Option<String>,
    pub description: String,
}

/// 検索結果の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// 検索語の入力を促す
    Prompt,
    NoResults,
    Results {
        articles: Vec<ResultItem>,
        projects: Vec<ResultItem>,
    },
}

impl From<&SearchOutcome> for SearchView {
    fn from(outcome: &SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::EmptyQuery => SearchView::Prompt,
            SearchOutcome::NoMatches => SearchView::NoResults,
            SearchOutcome::Matches { articles, projects } => SearchView::Results {
                articles: articles
                    .iter()
                    .map(|a| ResultItem {
                        kind: RecordKind::Article,
                        title: a.title.clone(),
                        date: Some(format_date(&a.date)),
                        description: a.description.clone(),
                    })
                    .collect(),
                projects: projects
                    .iter()
                    .map(|p| ResultItem {
                        kind: RecordKind::Project,
                        title: p.title.clone(),
                        date: None,
                        description: p.description.clone(),
                    })
                    .collect(),
            },
        }
    }
}
