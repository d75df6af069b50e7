// SPDX-License-Identifier: MIT

//! HTTP surface tests for the planner API.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;
use tripweaver::config::Config;

mod common;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_analyze_query_returns_intent() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/query/analyze",
            serde_json::json!({"query": "a week in Tokyo with great food"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["destination"], "Tokyo, Japan");
    assert_eq!(json["days"], 7);
    assert!(json["interests"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t == "local cuisine"));

    // Analysis is pure: nothing is stored.
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_generate_route_stores_and_returns_wire_shape() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/routes/generate",
            serde_json::json!({"query": "5 days in Rome, museums and history"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let route = &json["route"];
    for field in [
        "id",
        "name",
        "location",
        "days",
        "sites",
        "cost",
        "upvotes",
        "views",
        "created_date",
        "user",
        "interests",
        "query",
    ] {
        assert!(route.get(field).is_some(), "route missing field {field}");
    }
    assert_eq!(route["days"], 5);
    assert_eq!(route["upvotes"], 0);
    assert_eq!(route["views"], 0);
    assert!(route["user"]["avatar"].is_string());

    let timeline = json["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 5);
    let first_leg = &timeline[0]["transportation"][0];
    assert!(first_leg.get("type").is_some());
    assert!(first_leg.get("durationMinutes").is_some());
    assert!(first_leg.get("distance").is_some());
    assert!(timeline[0]["sites"][0].get("timeSlot").is_some());

    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_generate_random_route() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/routes/random")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["route"]["query"].as_str().unwrap().starts_with("I want to visit"));
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_list_routes() {
    let (app, _state) = common::create_test_app();

    app.clone()
        .oneshot(post_json(
            "/api/routes/generate",
            serde_json::json!({"query": "a weekend in Barcelona"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/routes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["routes"][0]["location"], "Barcelona, Spain");
}

#[tokio::test]
async fn test_get_route_by_id_and_missing_route() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/routes/generate",
            serde_json::json!({"query": "3 days in Kyoto"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["route"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/routes/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["location"], "Kyoto, Japan");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/routes/route-none")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_query_too_long_is_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/routes/generate",
            serde_json::json!({"query": "x".repeat(1001)}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_empty_query_is_accepted() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/routes/generate",
            serde_json::json!({"query": ""}),
        ))
        .await
        .unwrap();

    // The extractor never fails; defaults apply all the way down.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["route"]["location"], "Paris, France");
}

#[tokio::test]
async fn test_disabled_planner_returns_503() {
    let config = Config {
        planner_enabled: false,
        ..Config::test_default()
    };
    let (app, _state) = common::create_test_app_with_config(config);

    for uri in ["/api/query/analyze", "/api/routes/generate"] {
        let response = app
            .clone()
            .oneshot(post_json(uri, serde_json::json!({"query": "a week in Tokyo"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "planner_disabled");
    }
}
