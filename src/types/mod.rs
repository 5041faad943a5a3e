//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - エラー型: データ取得・ストレージ・設定のエラーの統一表現
//! - 設定型: デフォルト値・YAML・環境変数から組み立てる設定

pub mod config;
pub mod error;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult, ContainerIds, FallbackPolicy, SiteConfig};
pub use error::{SiteError, SiteResult};
