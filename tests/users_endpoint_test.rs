use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use stockmatch::api::{self, AppState};
use stockmatch::config::Config;
use stockmatch::db::init_db;
use stockmatch::domain::NewUser;
use stockmatch::{Repository, Store, User};
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    users: Vec<User>,
    _temp: TempDir,
}

async fn setup_test_app(search_limit: u32) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));

    let mut users = Vec::new();
    for new_user in [
        NewUser::new("TESTannaUser", "TESTannaPassword", "TESTanna", "TESTanna@anna"),
        NewUser::new("TESTkateUser", "TESTkatePassword", "TESTkate", "TESTkate@kate"),
        NewUser::new("someoneElse", "pw", "Someone", "someone@else"),
    ] {
        users.push(repo.insert_user(&new_user).await.unwrap());
    }

    let config = Config {
        port: 0,
        database_path: db_path,
        user_search_limit: search_limit,
    };
    let state = AppState::new(repo, Arc::new(Store::default()), config);

    TestApp {
        app: api::create_router(state),
        users,
        _temp: temp_dir,
    }
}

async fn request(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_get_user_returns_user() {
    let test_app = setup_test_app(50).await;
    let anna = test_app.users[0].clone();

    let (status, body) = request(test_app.app, &format!("/users/{}", anna.id)).await;
    assert_eq!(status, StatusCode::OK);

    let user = &body["data"];
    assert_eq!(user["name"], "TESTanna");
    assert_eq!(user["username"], "TESTannaUser");
    assert_eq!(user["email"], "TESTanna@anna");
    assert!(user.get("password").is_none());
    assert!(user.get("password_digest").is_none());
}

#[tokio::test]
async fn test_get_user_invalid_id_is_not_found() {
    let test_app = setup_test_app(50).await;

    let (status, body) = request(test_app.app.clone(), "/users/test1234").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = request(test_app.app, "/users/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_users_matches_substring() {
    let test_app = setup_test_app(50).await;
    let (status, body) = request(test_app.app, "/users/?search=TEST").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_object());
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_users_is_case_insensitive() {
    let test_app = setup_test_app(50).await;
    let (status, body) = request(test_app.app, "/users?search=tEsT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_users_without_query_lists_all() {
    let test_app = setup_test_app(50).await;
    let (status, body) = request(test_app.app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_users_respects_limit() {
    let test_app = setup_test_app(1).await;
    let (status, body) = request(test_app.app, "/users?search=test").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["username"], "TESTannaUser");
}
