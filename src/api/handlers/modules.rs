//! Course module CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::api::dto::{ModuleRequest, ModuleResponse};
use crate::api::extract::JsonBody;
use crate::api::handlers::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Creates module-related routes.
///
/// Routes:
/// - POST /module         - Create a module (also `/module/`)
/// - GET /module/{id}     - Get module by ID
/// - PUT /module/{id}     - Update module by ID
/// - DELETE /module/{id}  - Delete module by ID
pub fn module_routes() -> Router<AppState> {
    Router::new()
        .route("/module", post(create_module))
        .route("/module/", post(create_module))
        .route(
            "/module/{id}",
            get(get_module).put(update_module).delete(delete_module),
        )
}

/// POST /module - Create a module
///
/// Returns 201 Created with the stored module, including its new id.
async fn create_module(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ModuleRequest>,
) -> Result<(StatusCode, Json<ModuleResponse>), AppError> {
    let module = state
        .services
        .modules
        .create_module(payload.into_fields())
        .await?;
    tracing::info!(module_id = module.id, "Module created");
    Ok((StatusCode::CREATED, Json(ModuleResponse::from(module))))
}

/// GET /module/{id} - Get module by ID
async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModuleResponse>, AppError> {
    let id = parse_id(&id, "module")?;
    let module = state.services.modules.get_module(id).await?;
    Ok(Json(ModuleResponse::from(module)))
}

/// PUT /module/{id} - Update module
///
/// The module must exist (404) before the body is decoded (400).
async fn update_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<JsonBody<ModuleRequest>, AppError>,
) -> Result<Json<ModuleResponse>, AppError> {
    let id = parse_id(&id, "module")?;
    let existing = state.services.modules.get_module(id).await?;
    let JsonBody(payload) = payload?;

    let module = state
        .services
        .modules
        .update_module(existing, payload.into_fields())
        .await?;
    tracing::info!(module_id = module.id, "Module updated");
    Ok(Json(ModuleResponse::from(module)))
}

/// DELETE /module/{id} - Delete module
///
/// Returns 204 No Content whether or not the module existed.
async fn delete_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id, "module")?;
    state.services.modules.delete_module(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use proptest::prelude::*;

    use crate::api::dto::{ModuleRequest, ModuleResponse};
    use crate::api::handlers::test_support::{
        TestApp, arb_module_request, body_json, body_text, runtime,
    };

    const CS101: &str =
        r#"{"module_name":"CS101","module_duration":12,"exam_type":"written","version":"1.0"}"#;
    const CS102: &str =
        r#"{"module_name":"CS102","module_duration":24,"exam_type":"oral","version":"2.0"}"#;

    async fn create(app: &TestApp) -> ModuleResponse {
        let response = app.send(Method::POST, "/module", Some(CS101)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_value(body_json(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_module_lifecycle() {
        let app = TestApp::new();

        let response = app.send(Method::POST, "/module", Some(CS101)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["module_name"], "CS101");
        assert_eq!(created["module_duration"], 12);
        assert_eq!(created["exam_type"], "written");
        assert_eq!(created["version"], "1.0");
        assert!(created["id"].as_i64().unwrap() > 0);
        assert!(created["created_at"].is_string());
        assert!(created["updated_at"].is_string());

        let uri = format!("/module/{}", created["id"]);
        let response = app.send(Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        let response = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.send(Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_accepts_trailing_slash() {
        let app = TestApp::new();

        let response = app.send(Method::POST, "/module/", Some(CS101)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(app.modules.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = TestApp::new();

        for body in ["{", "[1,2", r#"{"module_duration":"twelve"}"#] {
            let response = app.send(Method::POST, "/module", Some(body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        }
        assert_eq!(app.modules.len(), 0);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id_and_timestamps() {
        let app = TestApp::new();
        let body = json!({
            "id": 500,
            "module_name": "CS101",
            "module_duration": 12,
            "exam_type": "written",
            "version": "1.0",
            "created_at": "2001-01-01T00:00:00Z"
        })
        .to_string();

        let response = app.send(Method::POST, "/module", Some(&body)).await;
        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_ne!(created["created_at"], "2001-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_create_store_failure_is_500() {
        let app = TestApp::new();
        app.modules.set_failing(true);

        let response = app.send(Method::POST, "/module", Some(CS101)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "Database operation failed: insert module"
        );
    }

    #[tokio::test]
    async fn test_get_unknown_module_is_404() {
        let app = TestApp::new();

        let response = app.send(Method::GET, "/module/77", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_500() {
        let app = TestApp::new();

        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(CS101)),
            (Method::DELETE, None),
        ] {
            let response = app.send(method.clone(), "/module/abc", body).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "method: {}",
                method
            );
        }
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_updated_at() {
        let app = TestApp::new();
        let created = create(&app).await;

        let uri = format!("/module/{}", created.id);
        let response = app.send(Method::PUT, &uri, Some(CS102)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let updated: ModuleResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.module_name, "CS102");
        assert_eq!(updated.module_duration, 24);
        assert_eq!(updated.exam_type, "oral");
        assert_eq!(updated.version, "2.0");

        let response = app.send(Method::GET, &uri, None).await;
        let stored: ModuleResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_module_is_404_without_side_effects() {
        let app = TestApp::new();
        create(&app).await;

        let response = app.send(Method::PUT, "/module/999", Some(CS102)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.modules.len(), 1);

        let response = app.send(Method::GET, "/module/999", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_decoding() {
        let app = TestApp::new();

        let response = app.send(Method::PUT, "/module/5", Some("{garbage")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let created = create(&app).await;
        let uri = format!("/module/{}", created.id);
        let response = app.send(Method::PUT, &uri, Some("{garbage")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let app = TestApp::new();
        let created = create(&app).await;
        let uri = format!("/module/{}", created.id);

        for _ in 0..2 {
            let response = app.send(Method::DELETE, &uri, None).await;
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert!(body_text(response).await.is_empty());
        }

        let response = app.send(Method::DELETE, "/module/12345", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_store_failure_is_500() {
        let app = TestApp::new();
        app.modules.set_failing(true);

        let response = app.send(Method::DELETE, "/module/1", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn create_from(app: &TestApp, payload: &ModuleRequest) -> ModuleResponse {
        let body = serde_json::to_string(payload).unwrap();
        let response = app.send(Method::POST, "/module", Some(&body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_value(body_json(response).await).unwrap()
    }

    fn client_fields(module: &ModuleResponse) -> ModuleRequest {
        ModuleRequest {
            module_name: module.module_name.clone(),
            module_duration: module.module_duration,
            exam_type: module.exam_type.clone(),
            version: module.version.clone(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_created_module_reads_back(payload in arb_module_request()) {
            runtime().block_on(async {
                let app = TestApp::new();
                let created = create_from(&app, &payload).await;
                prop_assert_eq!(client_fields(&created), payload.clone());
                prop_assert_eq!(created.created_at, created.updated_at);

                let uri = format!("/module/{}", created.id);
                let response = app.send(Method::GET, &uri, None).await;
                prop_assert_eq!(response.status(), StatusCode::OK);
                let read: ModuleResponse = serde_json::from_value(body_json(response).await).unwrap();
                prop_assert_eq!(read, created);
                Ok(())
            })?;
        }

        #[test]
        fn prop_update_replaces_only_client_fields(
            original in arb_module_request(),
            changes in arb_module_request(),
        ) {
            runtime().block_on(async {
                let app = TestApp::new();
                let before = create_from(&app, &original).await;

                let uri = format!("/module/{}", before.id);
                let body = serde_json::to_string(&changes).unwrap();
                let response = app.send(Method::PUT, &uri, Some(&body)).await;
                prop_assert_eq!(response.status(), StatusCode::OK);
                let updated: ModuleResponse = serde_json::from_value(body_json(response).await).unwrap();

                prop_assert_eq!(updated.id, before.id);
                prop_assert_eq!(updated.created_at, before.created_at);
                prop_assert!(updated.updated_at >= before.updated_at);
                prop_assert_eq!(client_fields(&updated), changes.clone());

                let response = app.send(Method::GET, &uri, None).await;
                let stored: ModuleResponse = serde_json::from_value(body_json(response).await).unwrap();
                prop_assert_eq!(stored, updated);
                Ok(())
            })?;
        }
    }
}
