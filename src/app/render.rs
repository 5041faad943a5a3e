use crate::app::page::Page;
use crate::app::presenter::Presenter;
use crate::app::view::{article_previews, project_previews, ArticleCard, ProjectCard, SearchView};
use crate::domain::{RecordKind, RecordStore, SearchOutcome};
use crate::types::ContainerIds;
use log::debug;

/// レコードをページのコンテナに描画する
///
/// 対象のコンテナが見つからない場合はどの操作も何もしない。
pub struct Renderer<'a, P: Presenter> {
    presenter: &'a P,
    containers: &'a ContainerIds,
}

impl<'a, P: Presenter> Renderer<'a, P> {
    pub fn new(presenter: &'a P, containers: &'a ContainerIds) -> Self {
        Self {
            presenter,
            containers,
        }
    }

    /// 一覧コンテナを空にしてから全件のカードを順に追加する
    pub fn render_list(&self, kind: RecordKind, store: &RecordStore, page: &mut Page) {
        let id = match kind {
            RecordKind::Article => &self.containers.articles_list,
            RecordKind::Project => &self.containers.projects_list,
        };
        let Some(container) = page.container_mut(id) else {
            debug!("コンテナが見つからないため描画をスキップ: {}", id);
            return;
        };

        container.clear();
        match kind {
            RecordKind::Article => {
                for article in &store.articles {
                    container.append(self.presenter.article_card(&ArticleCard::from(article)));
                }
            }
            RecordKind::Project => {
                for project in &store.projects {
                    container.append(self.presenter.project_card(&ProjectCard::from(project)));
                }
            }
        }
    }

    /// トップページのプレビューを追加する（既存の中身は消さない）
    pub fn render_home_preview(&self, store: &RecordStore, page: &mut Page) {
        if !store.articles.is_empty() {
            if let Some(container) = page.container_mut(&self.containers.latest_articles) {
                for preview in article_previews(&store.articles) {
                    container.append(self.presenter.article_preview(&preview));
                }
            }
        }

        if !store.projects.is_empty() {
            if let Some(container) = page.container_mut(&self.containers.featured_projects) {
                for preview in project_previews(&store.projects) {
                    container.append(self.presenter.project_preview(&preview));
                }
            }
        }
    }

    /// 検索結果で結果コンテナの中身を置き換える
    pub fn render_search(&self, outcome: &SearchOutcome, page: &mut Page) {
        if let Some(container) = page.container_mut(&self.containers.search_results) {
            container.set_html(self.presenter.search_results(&SearchView::from(outcome)));
        }
    }
}
