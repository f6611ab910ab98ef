//! Route table for the registry wire protocol.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Creates the protocol router over the given state.
///
/// Every route carries a method fallback: the protocol answers a wrong
/// method on a known path with a plain 404, never a 405.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/subjects/:subject/versions",
            post(handlers::register_schema).fallback(handlers::transport_not_found),
        )
        .route(
            "/subjects/:subject/versions/:version",
            get(handlers::schema_by_subject_version).fallback(handlers::transport_not_found),
        )
        .route(
            "/schemas/ids/:id",
            get(handlers::schema_by_id).fallback(handlers::transport_not_found),
        )
        .route(
            "/schemas/ids/:id/versions",
            get(handlers::subject_versions_by_id).fallback(handlers::transport_not_found),
        )
        .fallback(handlers::transport_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_router(Arc::new(AppState::new()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    const STRING_SCHEMA_BODY: &str = r#"{"schema":"{\"type\":\"string\"}"}"#;

    #[tokio::test]
    async fn register_then_fetch_round_trip() {
        let app = test_app();

        let (status, body) =
            send(&app, "POST", "/subjects/foo/versions", Some(STRING_SCHEMA_BODY)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1}));

        let (status, body) = send(&app, "GET", "/subjects/foo/versions/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "subject": "foo",
                "version": 1,
                "id": 1,
                "schema": "{\"type\":\"string\"}",
            })
        );

        let (status, body) = send(&app, "GET", "/schemas/ids/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"schema": "{\"type\":\"string\"}"}));

        let (status, body) = send(&app, "GET", "/schemas/ids/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], 40403);
    }

    #[tokio::test]
    async fn reregistration_returns_the_same_id() {
        let app = test_app();

        let (_, first) =
            send(&app, "POST", "/subjects/foo/versions", Some(STRING_SCHEMA_BODY)).await;
        let (_, second) =
            send(&app, "POST", "/subjects/foo/versions", Some(STRING_SCHEMA_BODY)).await;
        assert_eq!(first, second);

        // The idempotent path allocated no second version.
        let (status, _) = send(&app, "GET", "/subjects/foo/versions/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn subject_versions_lists_every_subject_sharing_an_id() {
        let app = test_app();

        send(&app, "POST", "/subjects/a/versions", Some(STRING_SCHEMA_BODY)).await;
        send(&app, "POST", "/subjects/b/versions", Some(STRING_SCHEMA_BODY)).await;

        let (status, body) = send(&app, "GET", "/schemas/ids/1/versions", None).await;
        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["subject"], "a");
        assert_eq!(records[1]["subject"], "b");

        // Unknown id is an empty array, not an error.
        let (status, body) = send(&app, "GET", "/schemas/ids/99/versions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn missing_subject_version_uses_the_subject_error_code() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/subjects/unknown/versions/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], 40401);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn malformed_numeric_segments_are_internal_errors() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/subjects/foo/versions/latest", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error_code"], 50001);

        let (status, body) = send(&app, "GET", "/schemas/ids/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error_code"], 50001);

        let (status, body) = send(&app, "GET", "/schemas/ids/abc/versions", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error_code"], 50001);
    }

    #[tokio::test]
    async fn negative_id_is_well_formed_but_misses() {
        // "-1" parses as an i32, so this is a structured miss, not a 500.
        let app = test_app();
        let (status, body) = send(&app, "GET", "/schemas/ids/-1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], 40403);
    }

    #[tokio::test]
    async fn undecodable_register_body_is_an_internal_error() {
        let app = test_app();
        let (status, body) =
            send(&app, "POST", "/subjects/foo/versions", Some("not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error_code"], 50001);
    }

    #[tokio::test]
    async fn unknown_paths_get_a_bare_transport_404() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/subjects", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null, "no JSON error body");

        let (status, body) = send(&app, "GET", "/schemas/ids/1/versions/extra", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn wrong_method_gets_a_bare_transport_404() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/subjects/foo/versions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, "POST", "/schemas/ids/1", Some("{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn non_avro_schema_type_round_trips() {
        let app = test_app();

        let body = r#"{"schema":"{}","schemaType":"JSON"}"#;
        let (status, _) = send(&app, "POST", "/subjects/foo/versions", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, fetched) = send(&app, "GET", "/schemas/ids/1", None).await;
        assert_eq!(fetched["schemaType"], "JSON");
    }
}
