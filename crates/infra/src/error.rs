//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: 接続障害・キー重複・クエリ失敗・不正データの 4 分類
//!
//! `From<sqlx::Error>` が sqlx のエラーを種別に振り分け、同時に
//! 生成時点のスパン（どのリポジトリ操作の中で起きたか）を記録する。

use std::fmt;

use derive_more::Display;
use hrcore_domain::DomainError;
use thiserror::Error;
use tracing_error::SpanTrace;

/// PostgreSQL の一意制約違反（unique_violation）
const UNIQUE_VIOLATION: &str = "23505";

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::DuplicateKey(_) => { /* 重複登録 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ストレージに到達できない
    ///
    /// 接続拒否、TLS 失敗、プール枯渇（acquire タイムアウト）、接続設定不正など。
    #[error("ストレージに接続できません: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// 主キーの重複（SQLSTATE 23505）
    #[error("キーが重複しています: {0}")]
    DuplicateKey(#[source] sqlx::Error),

    /// 上記以外の SQL 実行失敗（行のデコード失敗を含む）
    #[error("クエリの実行に失敗しました: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// 保存済みの行がドメインの不変条件を満たさない
    #[error("保存データが不正です: {0}")]
    InvalidData(#[source] DomainError),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 主キー重複によるエラーか
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind, InfraErrorKind::DuplicateKey(_))
    }

    /// 種別を指定してエラーを生成する（SpanTrace はこの時点でキャプチャ）
    pub fn from_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    /// 不正データエラーを生成する
    pub fn invalid_data(source: DomainError) -> Self {
        Self::from_kind(InfraErrorKind::InvalidData(source))
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（種別判定 + SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        let kind = if is_connection_fault(&source) {
            InfraErrorKind::StorageUnavailable(source)
        } else if is_unique_violation(&source) {
            InfraErrorKind::DuplicateKey(source)
        } else {
            InfraErrorKind::QueryFailed(source)
        };

        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

fn is_connection_fault(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_)
            | sqlx::Error::Protocol(_)
    )
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}
