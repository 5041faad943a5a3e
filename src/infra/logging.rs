//! ログ出力の初期化
//!
//! `log`ファサード経由の出力を`flexi_logger`で標準エラーに流す。
//! 初期化はプロセスにつき一度だけ行い、同じレベルでの再呼び出しは何もしない。

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// ログ出力を初期化する
///
/// 初期化済みで同じレベルなら`Ok(())`、異なるレベルならエラーを返す。
/// パニックはしない。
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(normalized_level)
            .map_err(|err| format!("不正なログレベル `{normalized_level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("ロガーの起動に失敗: {err}"))?;

        info!(
            "event=logging_init level={} version={}",
            normalized_level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: normalized_level,
            _logger: logger,
        })
    })?;

    if state.level != normalized_level {
        return Err(format!(
            "ログは既にレベル `{}` で初期化済みです（`{}` への変更は不可）",
            state.level, normalized_level
        ));
    }
    Ok(())
}

/// 初期化済みのログレベル。未初期化なら`None`
pub fn logging_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "未対応のログレベル `{other}`（trace|debug|info|warn|error のいずれか）"
        )),
    }
}
