use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/customer",
            get(handlers::a001_customer::list_all).post(handlers::a001_customer::upsert),
        )
        .route(
            "/api/customer/testdata",
            post(handlers::a001_customer::insert_test_data),
        )
        .route(
            "/api/customer/:id",
            get(handlers::a001_customer::get_by_id).delete(handlers::a001_customer::delete),
        )
}
