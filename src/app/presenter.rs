use crate::app::view::{
    ArticleCard, ArticlePreview, ProjectCard, ProjectPreview, ResultItem, SearchView,
};

/// 表示モデルをページに差し込む文字列に変換するトレイト
///
/// 描画処理はこのトレイト越しにマークアップを得るため、
/// HTML以外の表現（端末向けテキスト等）に差し替えられる。
pub trait Presenter {
    fn article_card(&self, card: &ArticleCard) -> String;
    fn project_card(&self, card: &ProjectCard) -> String;
    fn article_preview(&self, preview: &ArticlePreview) -> String;
    fn project_preview(&self, preview: &ProjectPreview) -> String;
    fn search_results(&self, view: &SearchView) -> String;
}

/// HTMLのテキスト・属性値として安全な形にエスケープする
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const GROUP_HEADING_STYLE: &str = "margin-top: 1rem; margin-bottom: 0.5rem;";
const PREVIEW_STYLE: &str = "margin-bottom: 1rem;";
const PREVIEW_DESCRIPTION_STYLE: &str = "font-size: 0.9rem; color: #666;";

/// サイトのスタイルシートが想定するクラス名でHTMLを組み立てる
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    fn result_item(&self, item: &ResultItem) -> String {
        let date = item
            .date
            .as_deref()
            .map(|d| format!("<p class=\"date\">{}</p>", escape_html(d)))
            .unwrap_or_default();
        format!(
            "<div class=\"result-card\"><span class=\"type\">{}</span><h3>{}</h3>{}<p>{}</p></div>",
            item.kind,
            escape_html(&item.title),
            date,
            escape_html(&item.description)
        )
    }

    fn result_group(&self, heading: &str, items: &[ResultItem]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut html = format!("<h4 style=\"{}\">{}</h4>", GROUP_HEADING_STYLE, heading);
        for item in items {
            html.push_str(&self.result_item(item));
        }
        html
    }
}

impl Presenter for HtmlPresenter {
    fn article_card(&self, card: &ArticleCard) -> String {
        format!(
            "<div class=\"article-card\"><h3>{}</h3><p class=\"date\">{}</p><p>{}</p></div>",
            escape_html(&card.title),
            escape_html(&card.date),
            escape_html(&card.description)
        )
    }

    fn project_card(&self, card: &ProjectCard) -> String {
        let tags = if card.technologies.is_empty() {
            String::new()
        } else {
            let spans: Vec<String> = card
                .technologies
                .iter()
                .map(|tech| format!("<span class=\"skill-tag\">{}</span>", escape_html(tech)))
                .collect();
            format!("<div class=\"skills-grid\">{}</div>", spans.join(" "))
        };

        let links = if card.links.is_empty() {
            String::new()
        } else {
            let anchors: String = card
                .links
                .iter()
                .map(|link| {
                    format!(
                        "<a href=\"{}\" class=\"project-link\" target=\"_blank\">{}</a>",
                        escape_html(&link.href),
                        link.label
                    )
                })
                .collect();
            format!("<div class=\"project-links\">{}</div>", anchors)
        };

        format!(
            "<div class=\"project-card\"><h3>{}</h3><p>{}</p>{}{}</div>",
            escape_html(&card.title),
            escape_html(&card.description),
            tags,
            links
        )
    }

    fn article_preview(&self, preview: &ArticlePreview) -> String {
        format!(
            "<div style=\"{}\"><h4>{}</h4><p class=\"date\">{}</p></div>",
            PREVIEW_STYLE,
            escape_html(&preview.title),
            escape_html(&preview.date)
        )
    }

    fn project_preview(&self, preview: &ProjectPreview) -> String {
        format!(
            "<div style=\"{}\"><h4>{}</h4><p style=\"{}\">{}</p></div>",
            PREVIEW_STYLE,
            escape_html(&preview.title),
            PREVIEW_DESCRIPTION_STYLE,
            escape_html(&preview.description)
        )
    }

    fn search_results(&self, view: &SearchView) -> String {
        match view {
            SearchView::Prompt => "<p>Please enter a search term.</p>".to_string(),
            SearchView::NoResults => "<p>No results found.</p>".to_string(),
            SearchView::Results { articles, projects } => format!(
                "<h3>Search Results</h3>{}{}",
                self.result_group("Articles", articles),
                self.result_group("Projects", projects)
            ),
        }
    }
}

/// 端末表示用のプレーンテキスト
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn article_card(&self, card: &ArticleCard) -> String {
        format!("{} ({})\n  {}\n", card.title, card.date, card.description)
    }

    fn project_card(&self, card: &ProjectCard) -> String {
        let mut text = format!("{}\n  {}\n", card.title, card.description);
        if !card.technologies.is_empty() {
            text.push_str(&format!("  [{}]\n", card.technologies.join(", ")));
        }
        for link in &card.links {
            text.push_str(&format!("  {}: {}\n", link.label, link.href));
        }
        text
    }

    fn article_preview(&self, preview: &ArticlePreview) -> String {
        format!("- {} ({})\n", preview.title, preview.date)
    }

    fn project_preview(&self, preview: &ProjectPreview) -> String {
        format!("- {}: {}\n", preview.title, preview.description)
    }

    fn search_results(&self, view: &SearchView) -> String {
        match view {
            SearchView::Prompt => "Please enter a search term.\n".to_string(),
            SearchView::NoResults => "No results found.\n".to_string(),
            SearchView::Results { articles, projects } => {
                let mut text = String::from("Search Results\n");
                for item in articles.iter().chain(projects.iter()) {
                    match &item.date {
                        Some(date) => text.push_str(&format!(
                            "[{}] {} ({})\n  {}\n",
                            item.kind, item.title, date, item.description
                        )),
                        None => text.push_str(&format!(
                            "[{}] {}\n  {}\n",
                            item.kind, item.title, item.description
                        )),
                    }
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::ActionLink;
    use crate::domain::RecordKind;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>"a" & 'b'</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_article_card_markup() {
        let html = HtmlPresenter.article_card(&ArticleCard {
            title: "Title".to_string(),
            date: "January 15, 2024".to_string(),
            description: "Desc".to_string(),
        });
        assert_eq!(
            html,
            "<div class=\"article-card\"><h3>Title</h3><p class=\"date\">January 15, 2024</p><p>Desc</p></div>"
        );
    }

    #[test]
    fn test_project_card_markup() {
        let card = ProjectCard {
            title: "P".to_string(),
            description: "D".to_string(),
            technologies: vec!["Rust".to_string(), "Tokio".to_string()],
            links: vec![ActionLink {
                label: "GitHub",
                href: "https://x".to_string(),
            }],
        };
        let html = HtmlPresenter.project_card(&card);
        assert!(html.contains(
            "<div class=\"skills-grid\"><span class=\"skill-tag\">Rust</span> <span class=\"skill-tag\">Tokio</span></div>"
        ));
        assert_eq!(html.matches("class=\"project-link\"").count(), 1);
        assert!(html.contains(">GitHub</a>"));
    }

    #[test]
    fn test_project_card_without_tags_or_links() {
        let card = ProjectCard {
            title: "P".to_string(),
            description: "D".to_string(),
            technologies: vec![],
            links: vec![],
        };
        let html = HtmlPresenter.project_card(&card);
        assert_eq!(html, "<div class=\"project-card\"><h3>P</h3><p>D</p></div>");
    }

    #[test]
    fn test_search_results_markup() {
        let view = SearchView::Results {
            articles: vec![ResultItem {
                kind: RecordKind::Article,
                title: "A".to_string(),
                date: Some("March 10, 2024".to_string()),
                description: "ad".to_string(),
            }],
            projects: vec![],
        };
        let html = HtmlPresenter.search_results(&view);
        assert!(html.starts_with("<h3>Search Results</h3>"));
        assert!(html.contains(">Articles</h4>"));
        assert!(!html.contains(">Projects</h4>"));
        assert!(html.contains("<span class=\"type\">Article</span>"));

        assert_eq!(
            HtmlPresenter.search_results(&SearchView::Prompt),
            "<p>Please enter a search term.</p>"
        );
        assert_eq!(
            HtmlPresenter.search_results(&SearchView::NoResults),
            "<p>No results found.</p>"
        );
    }

    #[test]
    fn test_text_presenter() {
        let text = TextPresenter.article_preview(&ArticlePreview {
            title: "A".to_string(),
            date: "May 1, 2024".to_string(),
        });
        assert_eq!(text, "- A (May 1, 2024)\n");
        assert_eq!(
            TextPresenter.search_results(&SearchView::NoResults),
            "No results found.\n"
        );
    }
}
