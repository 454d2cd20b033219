//! # hrcore インフラ層
//!
//! 従業員レコードの永続化を担当するデータアクセス層。
//!
//! ## 設計方針
//!
//! ドメイン層の `Employee` を PostgreSQL の `employees` テーブルに対応づける。
//! SQL・接続管理・障害分類をこのクレートに閉じ込め、HTTP 層には
//! `Result<Option<T>, InfraError>` だけを見せる。
//!
//! - `Ok(Some(_))`: 対象が存在し、操作が成功した
//! - `Ok(None)`: 対象が存在しない（エラーではない）
//! - `Err(_)`: 接続障害やクエリ失敗
//!
//! ## 依存関係
//!
//! ```text
//! employee-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール、スコープ付きコネクション、スキーマ初期化
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use hrcore_infra::{db, repository::{EmployeeRepository, PostgresEmployeeRepository}};
//!
//! let pool = db::create_pool(&settings).await?;
//! db::bootstrap_schema(&pool).await?;
//!
//! let repo = PostgresEmployeeRepository::new(pool);
//! let employees = repo.find_all().await?;
//! ```

pub mod db;
pub mod error;
#[cfg(feature = "test-utils")]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
