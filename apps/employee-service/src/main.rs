//! # Employee Service サーバー
//!
//! 従業員レコードの CRUD を HTTP で提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `EMPLOYEE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `EMPLOYEE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | ※ | PostgreSQL 接続 URL |
//! | `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME` | ※ | `DATABASE_URL` 未設定時の接続パラメータ |
//! | `DB_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `10`） |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | No | 接続取得タイムアウト秒（デフォルト: `5`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p hrcore-employee-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use hrcore_employee_service::{
    app_builder::build_app,
    config::EmployeeServiceConfig,
    handler::{EmployeeState, ReadinessState},
};
use hrcore_infra::{
    db,
    repository::{EmployeeRepository, PostgresEmployeeRepository},
};
use hrcore_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Employee Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("employee-service");
    let service_name = tracing_config.service_name.clone();
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = %service_name).entered();

    // 設定読み込み
    let config = EmployeeServiceConfig::from_env()?;

    tracing::info!(
        "Employee Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database).await?;
    tracing::info!("データベースに接続しました");

    // テーブルが無ければ作成
    db::bootstrap_schema(&pool).await?;
    tracing::info!("employees テーブルを確認しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let repository: Arc<dyn EmployeeRepository> = Arc::new(PostgresEmployeeRepository::new(pool));
    let employee_state = Arc::new(EmployeeState { repository });

    let app = build_app(employee_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Employee Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
