//! # Employee Service エラー定義
//!
//! ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアントには固定文言の `{"error": "..."}` だけを返す。
//! 障害の原因（`InfraError` と `SpanTrace`）はログにのみ記録する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hrcore_domain::employee::EmployeeId;
use hrcore_infra::InfraError;
use hrcore_shared::ErrorResponse;
use thiserror::Error;

/// Employee Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// パスやボディの形式が不正
    #[error("入力が不正です: {0}")]
    InvalidInput(String),

    /// 対象の従業員が存在しない
    #[error("従業員が見つかりません: {0}")]
    NotFound(EmployeeId),

    /// 登録の失敗（ID 重複を含む）
    #[error("従業員の登録に失敗しました: {0}")]
    InsertFailed(#[source] InfraError),

    /// 削除の失敗
    #[error("従業員の削除に失敗しました: {0}")]
    DeleteFailed(#[source] InfraError),

    /// 上記以外のストレージ障害
    #[error("ストレージ操作に失敗しました: {0}")]
    Storage(#[from] InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidInput(reason) => {
                tracing::info!(reason = %reason, "不正な入力を受け付けませんでした");
                (StatusCode::BAD_REQUEST, ErrorResponse::invalid_input())
            }
            ApiError::NotFound(id) => {
                tracing::warn!(employee_id = %id, "従業員が見つかりません");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Employee not found"),
                )
            }
            ApiError::InsertFailed(e) if e.is_duplicate_key() => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "従業員 ID が重複しています"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Failed to add employee"),
                )
            }
            ApiError::InsertFailed(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "従業員の登録に失敗しました"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Failed to add employee"),
                )
            }
            ApiError::DeleteFailed(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "従業員の削除に失敗しました"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Failed to delete employee"),
                )
            }
            ApiError::Storage(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ストレージ操作に失敗しました"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
