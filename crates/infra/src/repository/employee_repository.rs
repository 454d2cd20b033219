//! # EmployeeRepository
//!
//! 従業員レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 ステートメント**: 各操作は [`ScopedConnection`] を 1 本借り、
//!   SQL を 1 回だけ実行する
//! - **書き込みはトランザクション内**: INSERT / UPDATE / DELETE はコミットしてから返す
//! - **存在しないことはエラーではない**: 対象行が無い場合は `Ok(None)`
//! - **部分更新は SQL 側で合成**: `COALESCE($n, column)` により、
//!   指定の無いフィールドは保存済みの値を維持する
//! - **数値の正規化**: `NUMERIC` は `Decimal` でデコードし、ドメインの `Salary` に変換してから返す

use async_trait::async_trait;
use hrcore_domain::employee::{
    Age,
    Department,
    Employee,
    EmployeeChanges,
    EmployeeId,
    EmployeeName,
    NewEmployee,
    Salary,
};
use rust_decimal::Decimal;
use sqlx::{Connection, PgPool};

use crate::{db::ScopedConnection, error::InfraError};

const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (id, name, salary, department, age)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, name, salary, department, age
"#;

const SELECT_EMPLOYEE_BY_ID: &str = r#"
    SELECT id, name, salary, department, age
    FROM employees
    WHERE id = $1
"#;

const SELECT_ALL_EMPLOYEES: &str = r#"
    SELECT id, name, salary, department, age
    FROM employees
"#;

const UPDATE_EMPLOYEE: &str = r#"
    UPDATE employees
    SET name       = COALESCE($1, name),
        salary     = COALESCE($2, salary),
        department = COALESCE($3, department),
        age        = COALESCE($4, age)
    WHERE id = $5
    RETURNING id, name, salary, department, age
"#;

const DELETE_EMPLOYEE: &str = r#"
    DELETE FROM employees
    WHERE id = $1
    RETURNING id
"#;

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 従業員を登録し、保存された行を返す
    ///
    /// 同じ ID が既に存在する場合は `DuplicateKey` エラーになる。
    async fn insert(&self, employee: &Employee) -> Result<Employee, InfraError>;

    /// ID で従業員を検索する
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;

    /// 全従業員を取得する（順序は不定）
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

    /// 指定されたフィールドだけを更新し、更新後の行を返す
    async fn update(
        &self,
        id: EmployeeId,
        changes: &EmployeeChanges,
    ) -> Result<Option<Employee>, InfraError>;

    /// 従業員を削除し、削除した ID を返す
    async fn delete(&self, id: EmployeeId) -> Result<Option<EmployeeId>, InfraError>;
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `employees` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id:         i32,
    name:       Option<String>,
    salary:     Option<Decimal>,
    department: Option<String>,
    age:        Option<i32>,
}

impl EmployeeRow {
    fn into_employee(self) -> Result<Employee, InfraError> {
        Ok(Employee::new(NewEmployee {
            id:         EmployeeId::new(self.id),
            name:       self
                .name
                .map(EmployeeName::new)
                .transpose()
                .map_err(InfraError::invalid_data)?,
            salary:     self
                .salary
                .map(Salary::new)
                .transpose()
                .map_err(InfraError::invalid_data)?,
            department: self
                .department
                .map(Department::new)
                .transpose()
                .map_err(InfraError::invalid_data)?,
            age:        self.age.map(Age::new),
        }))
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = %employee.id()))]
    async fn insert(&self, employee: &Employee) -> Result<Employee, InfraError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "insert").await?;
        let mut tx = conn.begin().await?;

        let row: EmployeeRow = sqlx::query_as(INSERT_EMPLOYEE)
            .bind(employee.id().as_i32())
            .bind(employee.name().map(EmployeeName::as_str))
            .bind(employee.salary().map(|s| s.as_decimal()))
            .bind(employee.department().map(Department::as_str))
            .bind(employee.age().map(|a| a.as_i32()))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        row.into_employee()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = %id))]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "find_by_id").await?;

        let row: Option<EmployeeRow> = sqlx::query_as(SELECT_EMPLOYEE_BY_ID)
            .bind(id.as_i32())
            .fetch_optional(&mut *conn)
            .await?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "find_all").await?;

        let rows: Vec<EmployeeRow> = sqlx::query_as(SELECT_ALL_EMPLOYEES)
            .fetch_all(&mut *conn)
            .await?;

        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = %id))]
    async fn update(
        &self,
        id: EmployeeId,
        changes: &EmployeeChanges,
    ) -> Result<Option<Employee>, InfraError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "update").await?;
        let mut tx = conn.begin().await?;

        let row: Option<EmployeeRow> = sqlx::query_as(UPDATE_EMPLOYEE)
            .bind(changes.name().map(EmployeeName::as_str))
            .bind(changes.salary().map(|s| s.as_decimal()))
            .bind(changes.department().map(Department::as_str))
            .bind(changes.age().map(|a| a.as_i32()))
            .bind(id.as_i32())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        row.map(EmployeeRow::into_employee).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = %id))]
    async fn delete(&self, id: EmployeeId) -> Result<Option<EmployeeId>, InfraError> {
        let mut conn = ScopedConnection::acquire(&self.pool, "delete").await?;
        let mut tx = conn.begin().await?;

        let deleted: Option<(i32,)> = sqlx::query_as(DELETE_EMPLOYEE)
            .bind(id.as_i32())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted.map(|(id,)| EmployeeId::new(id)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hrcore_domain::DomainError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::InfraErrorKind;

    fn row() -> EmployeeRow {
        EmployeeRow {
            id:         1,
            name:       Some("Ann".to_string()),
            salary:     Some(Decimal::from_str("50000.50").unwrap()),
            department: Some("Eng".to_string()),
            age:        Some(30),
        }
    }

    #[test]
    fn test_行からドメインの従業員に変換する() {
        let sut = row().into_employee().unwrap();

        assert_eq!(sut.id(), EmployeeId::new(1));
        assert_eq!(sut.name().map(EmployeeName::as_str), Some("Ann"));
        assert_eq!(sut.salary().map(|s| s.to_f64()), Some(50000.5));
        assert_eq!(sut.department().map(Department::as_str), Some("Eng"));
        assert_eq!(sut.age(), Some(Age::new(30)));
    }

    #[test]
    fn test_nullの列はnoneのまま変換する() {
        let sut = EmployeeRow {
            id:         2,
            name:       None,
            salary:     None,
            department: None,
            age:        None,
        }
        .into_employee()
        .unwrap();

        assert_eq!(sut.name(), None);
        assert_eq!(sut.salary(), None);
        assert_eq!(sut.department(), None);
        assert_eq!(sut.age(), None);
    }

    #[test]
    fn test_列の制約を超える氏名はinvalid_dataになる() {
        let sut = EmployeeRow {
            name: Some("a".repeat(101)),
            ..row()
        }
        .into_employee();

        let err = sut.unwrap_err();
        assert!(matches!(
            err.kind(),
            InfraErrorKind::InvalidData(DomainError::Validation(_))
        ));
    }
}
