pub mod catalog;
pub mod record;
pub mod search;

// 公開APIの再エクスポート
pub use catalog::{default_articles, default_projects};
pub use record::{
    decode_records, Article, Project, RecordId, RecordKind, RecordStore, Searchable,
    NO_LINK_SENTINEL,
};
pub use search::{normalize_query, search, SearchOutcome};
