mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_with_seeded_admin_returns_role_and_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "ADMIN");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[tokio::test]
async fn login_with_seeded_student_returns_student_role() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "student", "password": "student123" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["role"], "STUDENT");

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_401() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "Invalid username or password.");

    Ok(())
}

#[tokio::test]
async fn login_with_unknown_username_is_indistinguishable_from_wrong_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "no-such-user", "password": "whatever" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "Invalid username or password.");

    Ok(())
}

#[tokio::test]
async fn login_with_missing_fields_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "admin" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Username and password are required.");

    Ok(())
}

#[tokio::test]
async fn register_then_login_with_new_account() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users/register", server.base_url))
        .json(&json!({ "username": "staffer", "password": "s3cret", "role": "STAFF" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["role"], "STAFF");

    let res = client
        .post(format!("{}/api/users/login", server.base_url))
        .json(&json!({ "username": "staffer", "password": "s3cret" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn register_duplicate_username_is_409() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let _ = client
            .post(format!("{}/api/users/register", server.base_url))
            .json(&json!({ "username": "dupe", "password": "pw" }))
            .send()
            .await?;
    }

    let res = client
        .post(format!("{}/api/users/register", server.base_url))
        .json(&json!({ "username": "dupe", "password": "pw" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    Ok(())
}
