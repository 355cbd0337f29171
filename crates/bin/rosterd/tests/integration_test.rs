//! End-to-end smoke tests for the full rosterd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use roster_adapter_http_axum::router;
use roster_adapter_http_axum::state::AppState;
use roster_adapter_storage_sqlite_sqlx::{Config, SqliteUserRepository};
use roster_app::services::user_service::UserService;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserPayload};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::new("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise");

    let user_repo = SqliteUserRepository::new(db.pool().clone());
    let state = AppState::new(UserService::new(user_repo));

    router::build(state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle for users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_user_crud_cycle() {
    let app = app().await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/user",
        Some(r#"{"name":"Ann","age":30,"location":"NYC"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, serde_json::json!(1));

    // Get
    let (status, body) = send(&app, "GET", "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let user: User = serde_json::from_value(body).unwrap();
    assert_eq!(
        user,
        User::from_payload(UserId::new(1), UserPayload::new("Ann", 30, "NYC"))
    );

    // Update
    let (status, body) = send(
        &app,
        "PUT",
        "/user/1",
        Some(r#"{"name":"Ann","age":31,"location":"NYC"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(1));

    let (_, body) = send(&app, "GET", "/user/1", None).await;
    assert_eq!(body["age"], 31);

    // Delete
    let (status, body) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(1));

    let (status, body) = send(&app, "GET", "/user/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User 1 not found");
}

#[tokio::test]
async fn should_return_empty_list_when_no_users_created() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_not_create_row_when_updating_missing_user() {
    let app = app().await;

    let (status, body) = send(&app, "PUT", "/user/5", Some(r#"{"name":"Ghost"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(0));

    let (_, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_zero_when_deleting_missing_user() {
    let app = app().await;

    let (status, body) = send(&app, "DELETE", "/user/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(0));
}

#[tokio::test]
async fn should_drop_deleted_user_from_list() {
    let app = app().await;

    for body in [
        r#"{"name":"Ann","age":30,"location":"NYC"}"#,
        r#"{"name":"Bob","age":41,"location":"Oslo"}"#,
    ] {
        let (status, _) = send(&app, "POST", "/user", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, "DELETE", "/user/1", None).await;
    assert_eq!(body, serde_json::json!(1));

    let (_, body) = send(&app, "GET", "/user", None).await;
    let users: Vec<User> = serde_json::from_value(body).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, UserId::new(2));
    assert_eq!(users[0].name, "Bob");
}

#[tokio::test]
async fn should_ignore_client_supplied_id_on_create() {
    let app = app().await;

    let (_, body) = send(
        &app,
        "POST",
        "/user",
        Some(r#"{"id":77,"name":"Ann","age":30,"location":"NYC"}"#),
    )
    .await;
    assert_eq!(body, serde_json::json!(1));

    let (status, _) = send(&app, "GET", "/user/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_answer_options_on_user_routes() {
    let app = app().await;

    for uri in ["/user", "/user/1"] {
        let (status, _) = send(&app, "OPTIONS", uri, None).await;
        assert!(status.is_success(), "OPTIONS {uri} rejected");
    }
}
