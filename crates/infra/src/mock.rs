//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! hrcore-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! PostgreSQL 実装と同じ契約を守る:
//! 重複 ID の登録は `DuplicateKey`、部分更新は `Employee::merged` で合成する。

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use hrcore_domain::employee::{Employee, EmployeeChanges, EmployeeId};

use crate::{
    error::{InfraError, InfraErrorKind},
    repository::EmployeeRepository,
};

// ===== MockEmployeeRepository =====

#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
    employees: Arc<Mutex<BTreeMap<EmployeeId, Employee>>>,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 事前データを投入する
    pub fn add_employee(&self, employee: Employee) {
        self.employees
            .lock()
            .unwrap()
            .insert(employee.id(), employee);
    }

    /// 現在保持している従業員の件数
    pub fn len(&self) -> usize {
        self.employees.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<Employee, InfraError> {
        let mut employees = self.employees.lock().unwrap();
        if employees.contains_key(&employee.id()) {
            return Err(duplicate_key(employee.id()));
        }
        employees.insert(employee.id(), employee.clone());
        Ok(employee.clone())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(self.employees.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Ok(self.employees.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: EmployeeId,
        changes: &EmployeeChanges,
    ) -> Result<Option<Employee>, InfraError> {
        let mut employees = self.employees.lock().unwrap();
        let Some(current) = employees.remove(&id) else {
            return Ok(None);
        };
        let updated = current.merged(changes);
        employees.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: EmployeeId) -> Result<Option<EmployeeId>, InfraError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .remove(&id)
            .map(|employee| employee.id()))
    }
}

/// PostgreSQL の一意制約違反と同じ種別のエラーを組み立てる
fn duplicate_key(id: EmployeeId) -> InfraError {
    InfraError::from_kind(InfraErrorKind::DuplicateKey(sqlx::Error::Protocol(
        format!("duplicate key value violates unique constraint \"employees_pkey\" (id={id})"),
    )))
}
