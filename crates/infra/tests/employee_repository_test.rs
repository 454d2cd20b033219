//! EmployeeRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロがテストごとに
//! 空のデータベースを作成し、終了後に破棄する。
//!
//! 実行方法:
//! ```bash
//! docker compose up -d postgres
//! DATABASE_URL=postgres://... cargo test -p hrcore-infra --test employee_repository_test -- --ignored
//! ```

mod common;

use common::{create_empty_employee, create_test_employee, setup_schema};
use hrcore_domain::employee::{
    Age,
    Department,
    EmployeeChanges,
    EmployeeId,
    EmployeeName,
    Salary,
};
use hrcore_infra::{
    InfraErrorKind,
    repository::{EmployeeRepository, PostgresEmployeeRepository},
};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

// ===== insert / find_by_id テスト =====

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_insertした従業員をfind_by_idで取得できる(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    let employee = create_test_employee(1);

    let inserted = sut.insert(&employee).await.unwrap();
    let found = sut.find_by_id(EmployeeId::new(1)).await.unwrap();

    assert_eq!(inserted, employee);
    assert_eq!(found, Some(employee));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_給与は小数2桁に丸めて保存される(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    let employee = create_test_employee(1);

    sut.insert(&employee).await.unwrap();
    let found = sut.find_by_id(EmployeeId::new(1)).await.unwrap().unwrap();

    assert_eq!(found.salary().unwrap().to_string(), "50000.50");
    assert_eq!(found.salary().unwrap().to_f64(), 50000.5);
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_nullのフィールドはnullのまま保存される(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);

    let inserted = sut.insert(&create_empty_employee(7)).await.unwrap();

    assert_eq!(inserted, create_empty_employee(7));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_同じidでinsertするとduplicate_keyになる(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_test_employee(1)).await.unwrap();

    let result = sut.insert(&create_empty_employee(1)).await;

    let err = result.unwrap_err();
    assert!(
        matches!(err.kind(), InfraErrorKind::DuplicateKey(_)),
        "{err:?}"
    );
    // 既存の行は変わらない
    let found = sut.find_by_id(EmployeeId::new(1)).await.unwrap();
    assert_eq!(found, Some(create_test_employee(1)));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないidのfind_by_idはnoneを返す(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);

    let found = sut.find_by_id(EmployeeId::new(999)).await.unwrap();

    assert_eq!(found, None);
}

// ===== find_all テスト =====

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_空のテーブルでfind_allは空を返す(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);

    let all = sut.find_all().await.unwrap();

    assert!(all.is_empty());
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_find_allで全件取得できる(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_test_employee(1)).await.unwrap();
    sut.insert(&create_empty_employee(2)).await.unwrap();

    let mut all = sut.find_all().await.unwrap();
    all.sort_by_key(|e| e.id());

    assert_eq!(all, vec![create_test_employee(1), create_empty_employee(2)]);
}

// ===== update テスト =====

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_updateは指定したフィールドだけを置換する(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_test_employee(1)).await.unwrap();

    let changes = EmployeeChanges::new().with_age(Age::new(31));
    let updated = sut
        .update(EmployeeId::new(1), &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated, create_test_employee(1).merged(&changes));
    assert_eq!(updated.age(), Some(Age::new(31)));
    assert_eq!(updated.name().map(EmployeeName::as_str), Some("Ann"));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_updateで全フィールドを置換できる(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_empty_employee(1)).await.unwrap();

    let changes = EmployeeChanges::new()
        .with_name(EmployeeName::new("Bob").unwrap())
        .with_salary(Salary::parse("61000").unwrap())
        .with_department(Department::new("Ops").unwrap())
        .with_age(Age::new(45));
    let updated = sut
        .update(EmployeeId::new(1), &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name().map(EmployeeName::as_str), Some("Bob"));
    assert_eq!(updated.salary().map(|s| s.to_string()), Some("61000.00".to_string()));
    assert_eq!(updated.department().map(Department::as_str), Some("Ops"));
    assert_eq!(updated.age(), Some(Age::new(45)));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_空の変更でupdateしても値は変わらない(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_test_employee(1)).await.unwrap();

    let updated = sut
        .update(EmployeeId::new(1), &EmployeeChanges::new())
        .await
        .unwrap();

    assert_eq!(updated, Some(create_test_employee(1)));
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないidのupdateはnoneを返す(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);

    let changes = EmployeeChanges::new().with_age(Age::new(31));
    let updated = sut.update(EmployeeId::new(999), &changes).await.unwrap();

    assert_eq!(updated, None);
}

// ===== delete テスト =====

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_deleteで削除したidが返り以後は見つからない(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);
    sut.insert(&create_test_employee(1)).await.unwrap();

    let deleted = sut.delete(EmployeeId::new(1)).await.unwrap();
    let found = sut.find_by_id(EmployeeId::new(1)).await.unwrap();

    assert_eq!(deleted, Some(EmployeeId::new(1)));
    assert_eq!(found, None);
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないidのdeleteはnoneを返す(pool: PgPool) {
    setup_schema(&pool).await;
    let sut = PostgresEmployeeRepository::new(pool);

    let deleted = sut.delete(EmployeeId::new(999)).await.unwrap();

    assert_eq!(deleted, None);
}
