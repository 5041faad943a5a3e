use super::record::{Article, Project};

/// リソース取得に失敗した場合に使うデフォルトの記事一覧
pub fn default_articles() -> Vec<Article> {
    let article = |id: i64, title: &str, description: &str, date: &str| Article {
        id: Some(id.into()),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        content: Some("Full article content here...".to_string()),
    };

    vec![
        article(
            1,
            "Getting Started with Web Development",
            "A comprehensive guide to starting your journey in web development, covering HTML, CSS, and JavaScript basics.",
            "2024-01-15",
        ),
        article(
            2,
            "The Power of Minimalistic Design",
            "Exploring how minimalism in web design can improve user experience and site performance.",
            "2024-02-20",
        ),
        article(
            3,
            "Building Dynamic Websites with JavaScript",
            "Learn how to create interactive and dynamic websites using modern JavaScript techniques.",
            "2024-03-10",
        ),
    ]
}

/// リソース取得に失敗した場合に使うデフォルトのプロジェクト一覧
pub fn default_projects() -> Vec<Project> {
    let project = |id: i64, title: &str, description: &str, technologies: [&str; 3]| Project {
        id: Some(id.into()),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: Some("#".to_string()),
        github: Some("#".to_string()),
    };

    vec![
        project(
            1,
            "Portfolio Website",
            "A minimalistic personal portfolio website built with HTML, CSS, and JavaScript.",
            ["HTML", "CSS", "JavaScript"],
        ),
        project(
            2,
            "Task Management App",
            "A simple yet powerful task management application with local storage support.",
            ["JavaScript", "LocalStorage", "CSS Grid"],
        ),
        project(
            3,
            "Weather Dashboard",
            "Real-time weather information dashboard with a clean and intuitive interface.",
            ["API Integration", "JavaScript", "Responsive Design"],
        ),
    ]
}
