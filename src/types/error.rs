use crate::types::ConfigError;
use thiserror::Error;

/// サイト全体で使用されるエラー型
/// データ取得、ローカルストレージ、シリアライゼーションに関するエラーを定義
#[derive(Error, Debug)]
pub enum SiteError {
    /// リソース取得の経路そのものが失敗した（通信エラー、パースエラー等）
    #[error("リソース取得に失敗しました: {resource} - {source}")]
    RetrievalFailure {
        resource: String,
        #[source]
        source: anyhow::Error,
    },

    /// リソースは応答したが成功ステータスではなかった
    #[error("リソースが成功以外のステータスを返しました: {resource} (status {status})")]
    NonSuccessResponse { resource: String, status: u16 },

    /// ローカルに保存された追加レコードのデシリアライズに失敗
    #[error("保存済みレコードの解析に失敗しました: {key} - {source}")]
    MalformedPersistedOverride {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// 追加レコードに割り当てるIDが残っていない
    #[error("新しいIDを割り当てられません: {key}")]
    IdExhausted { key: String },

    /// ファイルシステムエラー
    #[error("ファイルシステムエラー: {path} - {source}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// シリアライゼーションエラー
    #[error("シリアライゼーションエラー: {context} - {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SiteError {
    /// リソース取得失敗エラーを作成
    pub fn retrieval_failure<R: Into<String>>(resource: R, source: anyhow::Error) -> Self {
        Self::RetrievalFailure {
            resource: resource.into(),
            source,
        }
    }

    /// 非成功ステータスエラーを作成
    pub fn non_success<R: Into<String>>(resource: R, status: u16) -> Self {
        Self::NonSuccessResponse {
            resource: resource.into(),
            status,
        }
    }

    /// 保存済みレコード解析エラーを作成
    pub fn malformed_override<K: Into<String>>(key: K, source: serde_json::Error) -> Self {
        Self::MalformedPersistedOverride {
            key: key.into(),
            source,
        }
    }

    /// ID枯渇エラーを作成
    pub fn id_exhausted<K: Into<String>>(key: K) -> Self {
        Self::IdExhausted { key: key.into() }
    }

    /// ファイルシステムエラーを作成
    pub fn file_system<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// シリアライゼーションエラーを作成
    pub fn serialization<C: Into<String>>(context: C, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}

/// サイトエラーのResult型エイリアス
pub type SiteResult<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_context() {
        let err = SiteError::non_success("data/articles.json", 404);
        let message = err.to_string();
        assert!(message.contains("data/articles.json"));
        assert!(message.contains("404"));

        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = SiteError::malformed_override("userArticles", parse_err);
        assert!(err.to_string().contains("userArticles"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: SiteError = ConfigError::invalid_value("timeoutが不正").into();
        assert_eq!(err.to_string(), "設定値が不正です: timeoutが不正");
    }
}
