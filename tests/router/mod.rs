//! Requests sent through the full router, covering extraction failures and JSON bodies.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use stellar_tracker::server::{
    config::Config,
    model::app::AppState,
    startup::build_router,
};
use tower::ServiceExt;
use tracker_test_utils::prelude::*;

fn router(test: &TestContext) -> Router {
    let config = Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .expect("config should be valid");

    build_router(&config, test.to_app_state::<AppState>())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[tokio::test]
/// Expect a created save to be readable through its returned ID
async fn creates_and_reads_save() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let (status, body) = send(
        router(&test),
        json_request(
            "POST",
            "/api/1/saves",
            json!({"name": "Alpha", "mining_speed": 120}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 0);
    assert!(body.get("notes").is_some());

    let id = body["id"].as_str().unwrap_or_default().to_string();
    let (status, body) = send(router(&test), get(&format!("/api/1/saves/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alpha");

    Ok(())
}

#[tokio::test]
/// Expect a Duplicate body naming the object and its key
async fn duplicate_save_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;

    let (status, body) = send(
        router(&test),
        json_request(
            "POST",
            "/api/1/saves",
            json!({"name": "Alpha", "mining_speed": 100}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "Duplicate");
    assert_eq!(body["object"], "save");
    assert_eq!(body["keys"][0]["name"], "name");
    assert!(body.get("field").is_none());

    Ok(())
}

#[tokio::test]
/// Expect InvalidFieldValue listing the allowed sort fields
async fn invalid_sort_lists_choices() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let (status, body) = send(router(&test), get("/api/1/saves?sort=mass")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "InvalidFieldValue");
    assert_eq!(body["field"]["name"], "sort:field");
    assert_eq!(body["allowed_values"]["type"], "Choice");

    Ok(())
}

#[tokio::test]
/// Expect paging metadata for repeated sort parameters
async fn pages_saves() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_save("Bravo")
        .with_save("Charlie")
        .build()
        .await?;

    let (status, body) = send(
        router(&test),
        get("/api/1/saves?size=2&sort=mining_speed&sort=name:desc"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Charlie");
    assert_eq!(body["metadata"]["total_results"], 3);
    assert_eq!(body["metadata"]["total_pages"], 2);
    assert_eq!(body["metadata"]["next_page"], 2);
    assert!(body["metadata"].get("prev_page").is_none());

    Ok(())
}

#[tokio::test]
/// Expect a page number past the database offset range to be a bad request
async fn rejects_page_beyond_offset_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;

    let (status, body) = send(
        router(&test),
        get("/api/1/saves?page=18446744073709551615&size=500"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "InvalidFieldValue");
    assert_eq!(body["field"]["name"], "page");
    assert_eq!(body["allowed_values"]["max"]["value"], 18446744073709551_u64);

    Ok(())
}

#[tokio::test]
/// Expect a malformed UUID in the path to be reported as InvalidUrlPath
async fn malformed_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let (status, body) = send(router(&test), get("/api/1/stars/not-a-uuid")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "InvalidUrlPath");

    Ok(())
}

#[tokio::test]
/// Expect an unknown spectral class to be rejected while parsing the body
async fn unknown_spectral_class_is_invalid_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;
    let uri = format!("/api/1/solar-systems/{}/star", test.solar_systems[0].id);

    let (status, body) = send(
        router(&test),
        json_request(
            "POST",
            &uri,
            json!({"spectral_class": "red_dwarf", "luminosity": 1.0, "radius": 1.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "InvalidJson");

    Ok(())
}

#[tokio::test]
/// Expect a body without a JSON content type to be an unsupported content type
async fn missing_content_type_is_unsupported() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let request = Request::builder()
        .method("POST")
        .uri("/api/1/saves")
        .body(Body::from(json!({"name": "Alpha", "mining_speed": 100}).to_string()))
        .expect("valid request");
    let (status, body) = send(router(&test), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error_code"], "UnsupportedContentType");

    Ok(())
}

#[tokio::test]
/// Expect a body over the default request limit to be too large
async fn oversized_body_is_payload_too_large() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let (status, body) = send(
        router(&test),
        json_request(
            "POST",
            "/api/1/saves",
            json!({"name": "a".repeat(3 * 1024 * 1024), "mining_speed": 100}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_code"], "PayloadTooLarge");

    Ok(())
}

#[tokio::test]
/// Expect `notes: null` to clear the notes through the HTTP layer
async fn patch_clears_notes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;
    let uri = format!("/api/1/solar-systems/{}", test.solar_systems[0].id);

    let (status, body) = send(
        router(&test),
        json_request("PATCH", &uri, json!({"notes": "twin suns"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "twin suns");

    let (status, body) = send(
        router(&test),
        json_request("PATCH", &uri, json!({"version": 1, "notes": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], Value::Null);
    assert_eq!(body["version"], 2);

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(router(&test), get("/api/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/1/saves").is_some());

    Ok(())
}
