//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use hrcore_domain::employee::{
    Age,
    Department,
    Employee,
    EmployeeId,
    EmployeeName,
    NewEmployee,
    Salary,
};
use hrcore_infra::db;
use sqlx::PgPool;

/// `employees` テーブルを作成する
///
/// `sqlx::test` はテストごとに空のデータベースを用意するため、
/// 各テストの冒頭で呼び出す。
pub async fn setup_schema(pool: &PgPool) {
    db::bootstrap_schema(pool)
        .await
        .expect("スキーマ作成に失敗");
}

/// 全フィールドを持つ従業員を作成
pub fn create_test_employee(id: i32) -> Employee {
    Employee::new(NewEmployee {
        id:         EmployeeId::new(id),
        name:       Some(EmployeeName::new("Ann").unwrap()),
        salary:     Some(Salary::parse("50000.50").unwrap()),
        department: Some(Department::new("Eng").unwrap()),
        age:        Some(Age::new(30)),
    })
}

/// ID 以外がすべて NULL の従業員を作成
pub fn create_empty_employee(id: i32) -> Employee {
    Employee::new(NewEmployee {
        id:         EmployeeId::new(id),
        name:       None,
        salary:     None,
        department: None,
        age:        None,
    })
}
