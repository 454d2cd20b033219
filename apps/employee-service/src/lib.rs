//! # Employee Service
//!
//! 従業員レコードの CRUD を提供する HTTP サービス。
//!
//! ```text
//! HTTP リクエスト → handler（入力の正規化） → EmployeeRepository → PostgreSQL
//! ```
//!
//! - [`app_builder`] - ルーターとミドルウェアの構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - HTTP エラーレスポンスへの変換
//! - [`handler`] - ハンドラ関数

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
