//! # Employee Service アプリケーション構築
//!
//! ルーター構築と HTTP ミドルウェアの適用を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## レイヤー配置（外側から）
//!
//! ```text
//! SetRequestIdLayer → PropagateRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
//! ```

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use hrcore_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    EmployeeState,
    ReadinessState,
    create_employee,
    delete_employee,
    get_employee,
    health_check,
    list_employees,
    readiness_check,
    update_employee,
};

/// 従業員 API のルーター
pub fn employee_router(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employee", post(create_employee))
        .route(
            "/employee/{id}",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        .with_state(state)
}

/// ヘルスチェックと従業員 API を束ね、ミドルウェアを適用したルーターを構築する
pub fn build_app(
    employee_state: Arc<EmployeeState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(employee_router(employee_state))
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
