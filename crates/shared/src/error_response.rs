//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス `{ "error": "..." }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービスの責務（shared に axum 依存を入れない）
//! - クライアントに返すメッセージは固定文言のみ。障害の原因はログにだけ残す

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// ## 使用例
///
/// ```
/// use hrcore_shared::ErrorResponse;
///
/// let body = ErrorResponse::invalid_input();
/// assert_eq!(body.error, "Invalid input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 任意のメッセージで作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 400 Bad Request（入力の形式不正）
    pub fn invalid_input() -> Self {
        Self::new("Invalid input")
    }

    /// 500 Internal Server Error
    ///
    /// メッセージは固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
