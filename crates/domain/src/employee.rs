//! # 従業員
//!
//! 従業員レコードと、その部分更新（マージ規則）を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | カラム |
//! |---|------------|------|
//! | [`Employee`] | 従業員レコード | `employees` の 1 行 |
//! | [`EmployeeId`] | 従業員 ID（呼び出し元が採番） | `id INTEGER PRIMARY KEY` |
//! | [`EmployeeName`] | 氏名 | `name VARCHAR(100)` |
//! | [`Salary`] | 給与 | `salary NUMERIC(10,2)` |
//! | [`Department`] | 部署 | `department VARCHAR(50)` |
//! | [`Age`] | 年齢 | `age INTEGER` |
//! | [`EmployeeChanges`] | 部分更新の差分 | - |
//!
//! ## マージ規則
//!
//! 部分更新では、4 つの可変フィールド（氏名・給与・部署・年齢）それぞれについて:
//!
//! - 値が指定されていない、または空白のみの文字列 → 既存値を維持
//! - それ以外 → 指定値で置換
//!
//! 数値フィールドを NULL に戻す手段は提供しない。
//! [`EmployeeChanges`] は空白のみの文字列を受け付けた時点で破棄するため、
//! 「空白で既存値を上書きする」状態は型として存在しない。

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::DomainError;

/// 給与の小数部桁数（`NUMERIC(10,2)` の scale）
const SALARY_SCALE: u32 = 2;

/// 給与の整数部の上限（`NUMERIC(10,2)` は整数部 8 桁）
const SALARY_UPPER_BOUND: i64 = 100_000_000;

// =========================================================================
// EmployeeId
// =========================================================================

/// 従業員 ID
///
/// 自動採番はせず、登録時に呼び出し元が指定する。一度作成したら変更できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct EmployeeId(i32);

impl EmployeeId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// 内部の i32 値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

// =========================================================================
// 文字列の値オブジェクト
// =========================================================================

define_bounded_string! {
    /// 氏名（最大 100 文字）
    pub struct EmployeeName {
        label: "氏名",
        max_length: 100,
    }
}

define_bounded_string! {
    /// 部署名（最大 50 文字）
    pub struct Department {
        label: "部署名",
        max_length: 50,
    }
}

// =========================================================================
// Salary
// =========================================================================

/// 給与（値オブジェクト）
///
/// `NUMERIC(10,2)` と同じ精度で保持する固定小数点数。
///
/// # 不変条件
///
/// - 小数部は常に 2 桁（`50000.5` は `50000.50` として保持）
/// - 絶対値は 10^8 未満
///
/// 丸めは PostgreSQL の `NUMERIC` と同じ「0.5 は 0 から遠い方へ」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Salary(Decimal);

impl Salary {
    /// 小数第 2 位に丸めて生成する
    ///
    /// # エラー
    ///
    /// 丸めた結果が `NUMERIC(10,2)` に収まらない場合は `DomainError::Validation` を返す。
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        let mut rounded =
            value.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);

        if rounded.abs() >= Decimal::from(SALARY_UPPER_BOUND) {
            return Err(DomainError::Validation(format!(
                "給与は絶対値 {SALARY_UPPER_BOUND} 未満である必要があります"
            )));
        }

        rounded.rescale(SALARY_SCALE);
        Ok(Self(rounded))
    }

    /// 10 進表記の文字列から生成する
    ///
    /// `"50000.50"` のような通常表記に加え、`"5e4"` のような指数表記も受け付ける。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        let decimal = Decimal::from_str_exact(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| {
                DomainError::Validation(format!("給与を数値として解釈できません: {value:?}"))
            })?;

        Self::new(decimal)
    }

    /// 固定小数点値を取得する
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// JSON 転送用の浮動小数点値に変換する
    ///
    /// 10^8 未満・小数 2 桁の値は f64 の有効桁数に収まるため、
    /// 文字列表記へ戻したときに元の値と一致する。
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

// =========================================================================
// Age
// =========================================================================

/// 年齢
///
/// テーブル定義に範囲制約がないため、値の検証は行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Age(i32);

impl Age {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

// =========================================================================
// Employee
// =========================================================================

/// 従業員の生成パラメータ
pub struct NewEmployee {
    pub id:         EmployeeId,
    pub name:       Option<EmployeeName>,
    pub salary:     Option<Salary>,
    pub department: Option<Department>,
    pub age:        Option<Age>,
}

/// 従業員エンティティ
///
/// ID 以外の 4 フィールドはすべて NULL を取りうる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id:         EmployeeId,
    name:       Option<EmployeeName>,
    salary:     Option<Salary>,
    department: Option<Department>,
    age:        Option<Age>,
}

impl Employee {
    /// 登録用の入力、または DB の行から従業員を組み立てる
    pub fn new(params: NewEmployee) -> Self {
        Self {
            id:         params.id,
            name:       params.name,
            salary:     params.salary,
            department: params.department,
            age:        params.age,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> Option<&EmployeeName> {
        self.name.as_ref()
    }

    pub fn salary(&self) -> Option<Salary> {
        self.salary
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// マージ規則を適用した更新後の従業員を返す
    ///
    /// `changes` に含まれるフィールドだけを置換し、それ以外は現在の値を維持する。
    /// ID は変更されない。
    pub fn merged(self, changes: &EmployeeChanges) -> Self {
        Self {
            id:         self.id,
            name:       changes.name.clone().or(self.name),
            salary:     changes.salary.or(self.salary),
            department: changes.department.clone().or(self.department),
            age:        changes.age.or(self.age),
        }
    }
}

// =========================================================================
// EmployeeChanges
// =========================================================================

/// 部分更新の差分
///
/// 指定されたフィールドだけを保持する。空白のみの氏名・部署名は
/// `with_*` の時点で破棄されるため、「未指定」と同じ扱いになる。
///
/// # 使用例
///
/// ```rust
/// use hrcore_domain::employee::{Age, EmployeeChanges, EmployeeName};
///
/// let changes = EmployeeChanges::new()
///     .with_name(EmployeeName::new("   ").unwrap())
///     .with_age(Age::new(31));
///
/// assert!(changes.name().is_none());
/// assert_eq!(changes.age(), Some(Age::new(31)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    name:       Option<EmployeeName>,
    salary:     Option<Salary>,
    department: Option<Department>,
    age:        Option<Age>,
}

impl EmployeeChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// 氏名を置換対象にする（空白のみの場合は無視）
    pub fn with_name(mut self, name: EmployeeName) -> Self {
        if !name.is_blank() {
            self.name = Some(name);
        }
        self
    }

    pub fn with_salary(mut self, salary: Salary) -> Self {
        self.salary = Some(salary);
        self
    }

    /// 部署名を置換対象にする（空白のみの場合は無視）
    pub fn with_department(mut self, department: Department) -> Self {
        if !department.is_blank() {
            self.department = Some(department);
        }
        self
    }

    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn name(&self) -> Option<&EmployeeName> {
        self.name.as_ref()
    }

    pub fn salary(&self) -> Option<Salary> {
        self.salary
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// 置換対象のフィールドが 1 つもないか
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.salary.is_none()
            && self.department.is_none()
            && self.age.is_none()
    }
}
