//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration.

use axum::{Router, middleware};

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware - generates/propagates request IDs
/// 2. Logging middleware - logs requests with request IDs
///
/// # Routes
/// - `/module`, `/module/{id}` - Course module CRUD
/// - `/user`, `/user/{id}` - User CRUD
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::modules::module_routes())
        .merge(handlers::users::user_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::api::handlers::test_support::TestApp;

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = TestApp::new();

        let response = app.send(Method::GET, "/modules", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let app = TestApp::new();

        let response = app.send(Method::GET, "/module", None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app.send(Method::POST, "/user/1", Some("{}")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
