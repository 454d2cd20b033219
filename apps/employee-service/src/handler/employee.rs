//! # 従業員 API ハンドラ
//!
//! 従業員レコードの取得・一覧・登録・部分更新・削除を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /employee/{id}` - 1 件取得
//! - `GET /employees` - 一覧
//! - `POST /employee` - 登録
//! - `PATCH /employee/{id}` - 部分更新
//! - `DELETE /employee/{id}` - 削除
//!
//! ## 入力の正規化
//!
//! リクエストボディの各フィールドは [`FieldInput`] として受け取り、
//! 「キーなし」「null」「空白のみの文字列」「値あり」を区別する。
//! 部分更新では値あり以外をすべて「変更なし」として扱う。
//!
//! ボディは生のバイト列として受け取り、自前でパースする。axum の `Json`
//! 抽出子のリジェクションは独自のエラーボディを返すため使わない。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
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
use hrcore_infra::repository::EmployeeRepository;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::ApiError;


/// 従業員 API の共有状態
pub struct EmployeeState {
    pub repository: Arc<dyn EmployeeRepository>,
}

// =============================================================================
// リクエスト型
// =============================================================================

/// JSON ボディ中の 1 フィールド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput<T> {
    /// キーが存在しない
    Absent,
    /// `null`
    Null,
    /// 空白のみの文字列（元の文字列を保持）
    Blank(String),
    /// 値あり
    Value(T),
}

// derive だと `T: Default` が要求される
impl<T> Default for FieldInput<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> FieldInput<T> {
    /// 部分更新用: 値ありの場合だけ `Some`
    pub fn into_change(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null | Self::Blank(_) => None,
        }
    }
}

impl<T: FieldValue> FieldInput<T> {
    /// 登録用: キーなしと `null` は NULL、空白文字列はそのまま型変換する
    fn into_stored(self) -> Result<Option<T>, String> {
        match self {
            Self::Absent | Self::Null => Ok(None),
            Self::Blank(raw) => T::from_json(Value::String(raw)).map(Some),
            Self::Value(value) => Ok(Some(value)),
        }
    }
}

impl<'de, T: FieldValue> Deserialize<'de> for FieldInput<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Null),
            Value::String(s) if s.trim().is_empty() => Ok(Self::Blank(s)),
            other => T::from_json(other)
                .map(Self::Value)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// JSON 値からドメイン型への変換
pub trait FieldValue: Sized {
    fn from_json(value: Value) -> Result<Self, String>;
}

impl FieldValue for EmployeeId {
    fn from_json(value: Value) -> Result<Self, String> {
        integer_from_json(value).map(EmployeeId::new)
    }
}

impl FieldValue for Age {
    fn from_json(value: Value) -> Result<Self, String> {
        integer_from_json(value).map(Age::new)
    }
}

impl FieldValue for EmployeeName {
    fn from_json(value: Value) -> Result<Self, String> {
        EmployeeName::new(string_from_json(value)?).map_err(|e| e.to_string())
    }
}

impl FieldValue for Department {
    fn from_json(value: Value) -> Result<Self, String> {
        Department::new(string_from_json(value)?).map_err(|e| e.to_string())
    }
}

impl FieldValue for Salary {
    fn from_json(value: Value) -> Result<Self, String> {
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => return Err(format!("数値である必要があります: {other}")),
        };
        Salary::parse(&text).map_err(|e| e.to_string())
    }
}

/// 整数（JSON 整数、または整数を表す文字列）を `i32` として取り出す
fn integer_from_json(value: Value) -> Result<i32, String> {
    match &value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| format!("32 bit 整数である必要があります: {value}")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("32 bit 整数である必要があります: {value}")),
        _ => Err(format!("整数である必要があります: {value}")),
    }
}

fn string_from_json(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(format!("文字列である必要があります: {other}")),
    }
}

/// 従業員登録リクエスト
///
/// `id` は必須。その他のフィールドは省略・`null` で NULL として保存される。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEmployeeRequest {
    pub id:         FieldInput<EmployeeId>,
    pub name:       FieldInput<EmployeeName>,
    pub salary:     FieldInput<Salary>,
    pub department: FieldInput<Department>,
    pub age:        FieldInput<Age>,
}

impl CreateEmployeeRequest {
    fn into_new_employee(self) -> Result<NewEmployee, ApiError> {
        let FieldInput::Value(id) = self.id else {
            return Err(ApiError::InvalidInput(
                "id は整数で指定する必要があります".to_string(),
            ));
        };

        Ok(NewEmployee {
            id,
            name: self.name.into_stored().map_err(ApiError::InvalidInput)?,
            salary: self.salary.into_stored().map_err(ApiError::InvalidInput)?,
            department: self
                .department
                .into_stored()
                .map_err(ApiError::InvalidInput)?,
            age: self.age.into_stored().map_err(ApiError::InvalidInput)?,
        })
    }
}

/// 従業員の部分更新リクエスト
///
/// 更新対象は 4 フィールドのみ。`id` などそれ以外のキーは無視する。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEmployeeRequest {
    pub name:       FieldInput<EmployeeName>,
    pub salary:     FieldInput<Salary>,
    pub department: FieldInput<Department>,
    pub age:        FieldInput<Age>,
}

impl UpdateEmployeeRequest {
    fn into_changes(self) -> EmployeeChanges {
        let mut changes = EmployeeChanges::new();
        if let Some(name) = self.name.into_change() {
            changes = changes.with_name(name);
        }
        if let Some(salary) = self.salary.into_change() {
            changes = changes.with_salary(salary);
        }
        if let Some(department) = self.department.into_change() {
            changes = changes.with_department(department);
        }
        if let Some(age) = self.age.into_change() {
            changes = changes.with_age(age);
        }
        changes
    }
}

// =============================================================================
// レスポンス型
// =============================================================================

/// 従業員 DTO
///
/// 給与は JSON の数値（浮動小数点）として出力する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeDto {
    pub id:         i32,
    pub name:       Option<String>,
    pub salary:     Option<f64>,
    pub department: Option<String>,
    pub age:        Option<i32>,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id:         employee.id().as_i32(),
            name:       employee.name().map(|n| n.as_str().to_string()),
            salary:     employee.salary().map(|s| s.to_f64()),
            department: employee.department().map(|d| d.as_str().to_string()),
            age:        employee.age().map(|a| a.as_i32()),
        }
    }
}

/// 登録・更新のレスポンス
#[derive(Debug, Serialize)]
pub struct EmployeeMessageResponse {
    pub message:  &'static str,
    pub employee: EmployeeDto,
}

/// 削除のレスポンス
#[derive(Debug, Serialize)]
pub struct EmployeeDeletedResponse {
    pub message:    &'static str,
    pub deleted_id: i32,
}

// =============================================================================
// 入力のパース
// =============================================================================

fn parse_employee_id(raw: &str) -> Result<EmployeeId, ApiError> {
    raw.parse::<i32>()
        .map(EmployeeId::new)
        .map_err(|_| ApiError::InvalidInput(format!("従業員 ID が整数ではありません: {raw:?}")))
}

fn is_blank_body(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// ボディを JSON オブジェクトとしてパースする（`null` は `None`）
///
/// serde の derive は構造体を配列からも復元できてしまうため、
/// オブジェクト以外はここで弾く。
fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ApiError> {
    let invalid = |e: serde_json::Error| ApiError::InvalidInput(e.to_string());

    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => serde_json::from_value(value).map(Some).map_err(invalid),
        other => Err(ApiError::InvalidInput(format!(
            "JSON オブジェクトである必要があります: {other}"
        ))),
    }
}

// =============================================================================
// ハンドラ
// =============================================================================

/// GET /employee/{id}
#[tracing::instrument(skip_all, fields(employee_id = %raw_id))]
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_employee_id(&raw_id)?;

    let employee = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(EmployeeDto::from(&employee)))
}

/// GET /employees
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.repository.find_all().await?;

    let dtos: Vec<EmployeeDto> = employees.iter().map(EmployeeDto::from).collect();
    Ok(Json(dtos))
}

/// POST /employee
///
/// ボディが空・JSON オブジェクトでない・`id` が整数でない場合は 400。
/// ID 重複を含む保存失敗は 500（"Failed to add employee"）。
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request = if is_blank_body(&body) {
        None
    } else {
        parse_object::<CreateEmployeeRequest>(&body)?
    }
    .ok_or_else(|| ApiError::InvalidInput("ボディがありません".to_string()))?;
    let employee = Employee::new(request.into_new_employee()?);

    let stored = state
        .repository
        .insert(&employee)
        .await
        .map_err(ApiError::InsertFailed)?;

    tracing::info!(employee_id = %stored.id(), "従業員を登録しました");
    Ok((
        StatusCode::CREATED,
        Json(EmployeeMessageResponse {
            message:  "Employee added",
            employee: EmployeeDto::from(&stored),
        }),
    ))
}

/// PATCH /employee/{id}
///
/// ボディが空または `null` の場合は変更なしとして扱い、現在の値を返す。
#[tracing::instrument(skip_all, fields(employee_id = %raw_id))]
pub async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_employee_id(&raw_id)?;
    let request = if is_blank_body(&body) {
        UpdateEmployeeRequest::default()
    } else {
        parse_object::<UpdateEmployeeRequest>(&body)?.unwrap_or_default()
    };
    let changes = request.into_changes();

    let updated = state
        .repository
        .update(id, &changes)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    tracing::info!(employee_id = %id, unchanged = changes.is_empty(), "従業員を更新しました");
    Ok(Json(EmployeeMessageResponse {
        message:  "Employee updated",
        employee: EmployeeDto::from(&updated),
    }))
}

/// DELETE /employee/{id}
#[tracing::instrument(skip_all, fields(employee_id = %raw_id))]
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_employee_id(&raw_id)?;

    let deleted = state
        .repository
        .delete(id)
        .await
        .map_err(ApiError::DeleteFailed)?
        .ok_or(ApiError::NotFound(id))?;

    tracing::info!(employee_id = %deleted, "従業員を削除しました");
    Ok(Json(EmployeeDeletedResponse {
        message:    "Employee deleted",
        deleted_id: deleted.as_i32(),
    }))
}
