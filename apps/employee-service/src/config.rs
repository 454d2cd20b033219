//! # Employee Service 設定
//!
//! 環境変数から Employee Service サーバーの設定を読み込む。
//!
//! 接続先は `DATABASE_URL` を優先し、未設定の場合は
//! `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME` から組み立てる。
//! 空文字列の変数は未設定として扱う。

use std::time::Duration;

use hrcore_infra::db::{ConnectionSource, DatabaseSettings};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Employee Service サーバーの設定
#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// データベース接続設定
    pub database: DatabaseSettings,
}

impl EmployeeServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let source = match get("DATABASE_URL") {
            Some(url) => ConnectionSource::Url(url),
            None => ConnectionSource::Params {
                host:     get("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?,
                port:     parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
                user:     get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
                password: get("DB_PASSWORD"),
                database: get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            },
        };

        let acquire_timeout_secs = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host:     get("EMPLOYEE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port:     parse_or("EMPLOYEE_PORT", get("EMPLOYEE_PORT"), DEFAULT_PORT)?,
            database: DatabaseSettings {
                source,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    get("DB_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
