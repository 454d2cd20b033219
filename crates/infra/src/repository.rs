//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **トレイト経由の利用**: HTTP 層は `Arc<dyn EmployeeRepository>` だけに依存する
//! - **データベース抽象化**: SQL と行のデコードはこのモジュール内に閉じる
//! - **テスタビリティ**: `test-utils` feature でインメモリ実装に差し替えられる

pub mod employee_repository;

pub use employee_repository::{EmployeeRepository, PostgresEmployeeRepository};
