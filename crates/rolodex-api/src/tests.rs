//! Endpoint tests driving the router against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use rolodex_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(store))
}

/// Send one request and return `(status, parsed body)`. Non-JSON bodies
/// (axum's own rejections) come back as a JSON string.
async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };

  let resp = app
    .clone()
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = match serde_json::from_slice(&bytes) {
    Ok(v)  => v,
    Err(_) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
  };
  (status, value)
}

fn john() -> Value {
  json!({
    "name":       "John",
    "surname":    "Doe",
    "email":      "john@example.com",
    "phone":      "+123456",
    "birth_date": "1990-01-31",
  })
}

fn jane() -> Value {
  json!({
    "name":       "Jane",
    "surname":    "Roe",
    "email":      "jane@example.com",
    "phone":      "+654321",
    "birth_date": "1992-12-05",
  })
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_creates_contact_with_id_1() {
  let app = app().await;

  let (status, body) = send(&app, "POST", "/contacts", Some(john())).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["id"], 1);
  assert_eq!(body["name"], "John");
  assert_eq!(body["surname"], "Doe");
  assert_eq!(body["email"], "john@example.com");
  assert_eq!(body["phone"], "+123456");
  assert_eq!(body["birth_date"], "1990-01-31");
  assert_eq!(body["extra_info"], Value::Null);
}

#[tokio::test]
async fn post_duplicate_email_is_409() {
  let app = app().await;
  send(&app, "POST", "/contacts", Some(john())).await;

  let mut again = jane();
  again["email"] = json!("john@example.com");
  let (status, body) = send(&app, "POST", "/contacts", Some(again)).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert!(
    body["error"].as_str().unwrap().contains("john@example.com"),
    "body: {body}"
  );
}

#[tokio::test]
async fn post_invalid_email_is_422() {
  let app = app().await;
  let mut bad = john();
  bad["email"] = json!("not-an-email");
  let (status, _) = send(&app, "POST", "/contacts", Some(bad)).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_short_phone_is_422() {
  let app = app().await;
  let mut bad = john();
  bad["phone"] = json!("+1234");
  let (status, _) = send(&app, "POST", "/contacts", Some(bad)).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_missing_required_field_is_422() {
  let app = app().await;
  let mut bad = john();
  bad.as_object_mut().unwrap().remove("surname");
  let (status, _) = send(&app, "POST", "/contacts", Some(bad)).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_overlong_extra_info_is_422() {
  let app = app().await;
  let mut bad = john();
  bad["extra_info"] = json!("x".repeat(256));
  let (status, _) = send(&app, "POST", "/contacts", Some(bad)).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── Get one ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_exactly_the_submitted_fields() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;

  let (status, body) =
    send(&app, "GET", &format!("/contacts/{}", created["id"]), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, created);
}

#[tokio::test]
async fn get_missing_is_404() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/contacts/999999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("not found"));
}

// ─── List ────────────────────────────────────────────────────────────────────

async fn seed_two(app: &Router) {
  send(app, "POST", "/contacts", Some(john())).await;
  send(app, "POST", "/contacts", Some(jane())).await;
}

#[tokio::test]
async fn list_returns_all_in_id_order() {
  let app = app().await;
  seed_two(&app).await;

  let (status, body) = send(&app, "GET", "/contacts", None).await;
  assert_eq!(status, StatusCode::OK);
  let rows = body.as_array().unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0]["name"], "John");
  assert_eq!(rows[1]["name"], "Jane");
}

#[tokio::test]
async fn list_applies_skip_and_limit() {
  let app = app().await;
  seed_two(&app).await;

  let (status, body) =
    send(&app, "GET", "/contacts?skip=1&limit=1", None).await;
  assert_eq!(status, StatusCode::OK);
  let rows = body.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["name"], "Jane");
}

#[tokio::test]
async fn list_filters_by_substring_case_insensitively() {
  let app = app().await;
  seed_two(&app).await;

  let (status, body) = send(&app, "GET", "/contacts?name=JOH", None).await;
  assert_eq!(status, StatusCode::OK);
  let rows = body.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["email"], "john@example.com");

  let (_, body) = send(&app, "GET", "/contacts?email=example.com", None).await;
  assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_rejects_out_of_range_paging() {
  let app = app().await;

  let (status, _) = send(&app, "GET", "/contacts?limit=0", None).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let (status, _) = send(&app, "GET", "/contacts?limit=101", None).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let (status, _) = send(&app, "GET", "/contacts?skip=-1", None).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_replaces_every_field() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;

  let replacement = json!({
    "name":       "Johnny",
    "surname":    "Dorian",
    "email":      "jd@example.org",
    "phone":      "+99887766",
    "birth_date": "1989-07-14",
    "extra_info": "prefers JD",
  });
  let (status, body) = send(
    &app,
    "PUT",
    &format!("/contacts/{}", created["id"]),
    Some(replacement),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["id"], created["id"]);
  assert_eq!(body["name"], "Johnny");
  assert_eq!(body["surname"], "Dorian");
  assert_eq!(body["email"], "jd@example.org");
  assert_eq!(body["phone"], "+99887766");
  assert_eq!(body["birth_date"], "1989-07-14");
  assert_eq!(body["extra_info"], "prefers JD");
}

#[tokio::test]
async fn put_with_missing_field_is_422_and_preserves_nothing_old() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;

  // Omitting a required field must fail validation, not fall back to the
  // stored value.
  let mut partial = jane();
  partial.as_object_mut().unwrap().remove("phone");
  let (status, _) = send(
    &app,
    "PUT",
    &format!("/contacts/{}", created["id"]),
    Some(partial),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let (_, body) =
    send(&app, "GET", &format!("/contacts/{}", created["id"]), None).await;
  assert_eq!(body["phone"], "+123456");
}

#[tokio::test]
async fn put_unknown_id_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "PUT", "/contacts/999999", Some(john())).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_onto_taken_email_is_409() {
  let app = app().await;
  seed_two(&app).await;

  let mut stolen = jane();
  stolen["email"] = json!("john@example.com");
  let (status, _) = send(&app, "PUT", "/contacts/2", Some(stolen)).await;
  assert_eq!(status, StatusCode::CONFLICT);
}

// ─── Patch ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn patch_changes_only_phone() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;

  let (status, body) = send(
    &app,
    "PATCH",
    &format!("/contacts/{}", created["id"]),
    Some(json!({ "phone": "+1111111111" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["phone"], "+1111111111");
  assert_eq!(body["name"], "John");
  assert_eq!(body["surname"], "Doe");
  assert_eq!(body["email"], "john@example.com");
  assert_eq!(body["birth_date"], "1990-01-31");
  assert_eq!(body["extra_info"], Value::Null);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
  let app = app().await;
  let (status, _) = send(
    &app,
    "PATCH",
    "/contacts/999999",
    Some(json!({ "phone": "+1111111111" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_invalid_field_is_422() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;

  let (status, _) = send(
    &app,
    "PATCH",
    &format!("/contacts/{}", created["id"]),
    Some(json!({ "email": "nope" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn patch_onto_taken_email_is_409() {
  let app = app().await;
  seed_two(&app).await;

  let (status, _) = send(
    &app,
    "PATCH",
    "/contacts/2",
    Some(json!({ "email": "john@example.com" })),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_204_with_empty_body_then_get_is_404() {
  let app = app().await;
  let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;
  let uri = format!("/contacts/{}", created["id"]);

  let (status, body) = send(&app, "DELETE", &uri, None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert_eq!(body, Value::String(String::new()));

  let (status, _) = send(&app, "GET", &uri, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "DELETE", "/contacts/999999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn healthchecker_returns_welcome_message() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/api/healthchecker", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["message"].as_str().unwrap().contains("Welcome"));
}
