//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは入力の正規化とレスポンス整形だけを行い、永続化はリポジトリに委譲する
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック（liveness / readiness）
//! - `employee`: 従業員の取得・一覧・登録・部分更新・削除

pub mod employee;
pub mod health;

pub use employee::{
    EmployeeState,
    create_employee,
    delete_employee,
    get_employee,
    list_employees,
    update_employee,
};
pub use health::{ReadinessState, health_check, readiness_check};
