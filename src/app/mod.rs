pub mod loader;
pub mod overrides;
pub mod page;
pub mod presenter;
pub mod render;
pub mod site;
pub mod view;

// 公開APIの再エクスポート
pub use loader::{load_records, DataSource, LoadReport};
pub use overrides::{next_override_id, push_override, read_overrides};
pub use page::{classify_path, Container, Page, PageKind};
pub use presenter::{escape_html, HtmlPresenter, Presenter, TextPresenter};
pub use render::Renderer;
pub use site::{Site, SEARCH_KEY};
