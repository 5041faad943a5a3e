//! 静的な個人サイト向けのコンテンツ描画ライブラリ
//!
//! 記事とプロジェクトをデータリソース（失敗時はデフォルトカタログ）から読み込み、
//! ローカルに保存されたユーザー追加分を末尾に足してからページに描画する。
//! 両方の一覧に対する部分一致検索も提供する。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;
