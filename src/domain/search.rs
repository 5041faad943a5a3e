use super::record::{Article, Project, Searchable};

/// 検索結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 空白を除いた検索語が空だった（入力を促す）
    EmptyQuery,
    /// どちらの一覧にも一致がなかった
    NoMatches,
    /// 少なくとも一方に一致があった。順序は元の一覧の順
    Matches {
        articles: Vec<Article>,
        projects: Vec<Project>,
    },
}

impl SearchOutcome {
    /// 一致したレコードの総数
    pub fn match_count(&self) -> usize {
        match self {
            SearchOutcome::Matches { articles, projects } => articles.len() + projects.len(),
            _ => 0,
        }
    }
}

/// 検索語を正規化する（前後の空白除去と小文字化）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn filter_matching<T: Searchable + Clone>(records: &[T], needle: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.matches(needle))
        .cloned()
        .collect()
}

/// 記事とプロジェクトをタイトル・説明文の部分一致で検索する
///
/// 大文字小文字は区別しない。ランキングや並び替えは行わない。
pub fn search(query: &str, articles: &[Article], projects: &[Project]) -> SearchOutcome {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let articles = filter_matching(articles, &needle);
    let projects = filter_matching(projects, &needle);

    if articles.is_empty() && projects.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches { articles, projects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_articles, default_projects};

    fn titles<T: Searchable>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.title()).collect()
    }

    #[test]
    fn test_empty_query() {
        let articles = default_articles();
        let projects = default_projects();

        assert_eq!(search("", &articles, &projects), SearchOutcome::EmptyQuery);
        assert_eq!(search("   \t", &articles, &projects), SearchOutcome::EmptyQuery);
        assert_eq!(search("", &[], &[]), SearchOutcome::EmptyQuery);
    }

    #[test]
    fn test_no_matches() {
        let outcome = search("kubernetes", &default_articles(), &default_projects());
        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(outcome.match_count(), 0);

        assert_eq!(search("anything", &[], &[]), SearchOutcome::NoMatches);
    }

    #[test]
    fn test_web_over_default_catalog() {
        let outcome = search("web", &default_articles(), &default_projects());

        match outcome {
            SearchOutcome::Matches { articles, projects } => {
                // タイトル一致・説明文一致（"web design"）・"Websites"の部分一致
                assert_eq!(
                    titles(&articles),
                    vec![
                        "Getting Started with Web Development",
                        "The Power of Minimalistic Design",
                        "Building Dynamic Websites with JavaScript",
                    ]
                );
                // "Portfolio Website" の "Web"
                assert_eq!(titles(&projects), vec!["Portfolio Website"]);
            }
            other => panic!("一致が見つかるはず: {:?}", other),
        }
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let outcome = search("  WEATHER ", &default_articles(), &default_projects());
        match outcome {
            SearchOutcome::Matches { articles, projects } => {
                assert!(articles.is_empty());
                assert_eq!(titles(&projects), vec!["Weather Dashboard"]);
            }
            other => panic!("一致が見つかるはず: {:?}", other),
        }
    }

    #[test]
    fn test_mixed_field_matches_preserve_order() {
        // "javascript" は記事1（説明文）・記事3（タイトル）・プロジェクト1（説明文）に含まれる
        let outcome = search("javascript", &default_articles(), &default_projects());
        match outcome {
            SearchOutcome::Matches { articles, projects } => {
                assert_eq!(
                    articles.iter().map(Article::numeric_id).collect::<Vec<_>>(),
                    vec![Some(1), Some(3)]
                );
                assert_eq!(
                    projects.iter().map(Project::numeric_id).collect::<Vec<_>>(),
                    vec![Some(1)]
                );
            }
            other => panic!("一致が見つかるはず: {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_pass_through() {
        let mut articles = default_articles();
        articles.push(articles[0].clone());

        let outcome = search("getting started", &articles, &[]);
        assert_eq!(outcome.match_count(), 2);
    }
}
