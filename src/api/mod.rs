//! REST API for the municipality directory

pub mod handlers;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the read-only REST router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/municipalities", get(handlers::list_municipalities))
        .route("/api/v1/municipalities/:code", get(handlers::get_municipality))
        .route("/api/v1/counties", get(handlers::list_counties))
        .route("/api/v1/counties/:code", get(handlers::get_county))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = create_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["entries"], 565);
    }

    #[tokio::test]
    async fn test_get_municipality() {
        let (status, body) = get_json("/api/v1/municipalities/0714").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "0714");
        assert_eq!(body["name"], "NEWARK");
        assert_eq!(body["county"], "ESSEX");
    }

    #[tokio::test]
    async fn test_unknown_municipality() {
        let (status, body) = get_json("/api/v1/municipalities/0000").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown municipality code: 0000");
    }

    #[tokio::test]
    async fn test_list_municipalities() {
        let (status, body) = get_json("/api/v1/municipalities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 565);
        assert_eq!(body[0]["code"], "0101");

        let (status, body) = get_json("/api/v1/municipalities?county=11").await;
        assert_eq!(status, StatusCode::OK);
        let mercer = body.as_array().unwrap();
        assert_eq!(mercer.len(), 12);
        assert!(mercer.iter().any(|m| m["name"] == "TRENTON"));

        let (status, _) = get_json("/api/v1/municipalities?county=99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_counties() {
        let (status, body) = get_json("/api/v1/counties").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 21);
        assert_eq!(body[1]["name"], "BERGEN");
        assert_eq!(body[1]["municipality_count"], 70);

        let (status, body) = get_json("/api/v1/counties/21").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "WARREN");
        assert_eq!(body["municipalities"].as_array().unwrap().len(), 22);

        let (status, body) = get_json("/api/v1/counties/00").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown county code: 00");
    }
}
