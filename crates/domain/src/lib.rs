//! # hrcore ドメイン層
//!
//! 従業員レコードのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 呼び出し元が採番した ID を持つ [`employee::Employee`]
//! - **値オブジェクト**: カラム制約（文字数・桁数）を生成時に検証する Newtype
//! - **マージ規則**: 部分更新の「未指定・空白は既存値を維持」を純粋関数として表現
//! - **ドメインエラー**: 値オブジェクトの検証失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`employee`] - 従業員エンティティ、値オブジェクト、部分更新
//!
//! ## 使用例
//!
//! ```rust
//! use hrcore_domain::employee::{Age, Employee, EmployeeChanges, EmployeeId, EmployeeName, NewEmployee};
//!
//! let employee = Employee::new(NewEmployee {
//!     id:         EmployeeId::new(1),
//!     name:       Some(EmployeeName::new("Ann").unwrap()),
//!     salary:     None,
//!     department: None,
//!     age:        Some(Age::new(30)),
//! });
//!
//! let changes = EmployeeChanges::new().with_age(Age::new(31));
//! let updated = employee.merged(&changes);
//! assert_eq!(updated.age(), Some(Age::new(31)));
//! ```

#[macro_use]
mod macros;

pub mod employee;
pub mod error;

pub use error::DomainError;
