//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時に検出されるルール違反を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層で 400 Bad Request に変換する
//!
//! 「レコードが存在しない」はエラーではなく `Option::None` で表現する。
//! 不在と障害を型で区別するため、ここには `NotFound` を置かない。
//!
//! ## 使用例
//!
//! ```rust
//! use hrcore_domain::DomainError;
//!
//! fn validate_department(department: &str) -> Result<(), DomainError> {
//!     if department.chars().count() > 50 {
//!         return Err(DomainError::Validation(
//!             "部署名は 50 文字以内である必要があります".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がカラム制約に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 文字数制限の超過（氏名 100 文字、部署名 50 文字）
    /// - 給与が `NUMERIC(10,2)` の範囲を超える
    /// - 数値として解釈できない文字列
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
