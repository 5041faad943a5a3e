pub mod file;
pub mod local;

// 便利のため、よく使用される型を再エクスポート
pub use local::{FileStorage, KeyValueStore, MemoryStorage, USER_ARTICLES_KEY, USER_PROJECTS_KEY};
