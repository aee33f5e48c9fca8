mod common;

use anyhow::Result;
use serde_json::json;

use admin_console::auth::decode_token_subject;
use admin_console::models::UserRegister;
use admin_console::ClientError;
use common::{TestBackend, PASSWORD, REFRESH_TOKEN};

#[tokio::test]
async fn login_persists_tokens_and_exposes_user_id() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;

    let response = console.session.login("kim@example.com", PASSWORD).await?;
    assert_eq!(response.status, 200);
    assert_eq!(console.session.current_user_id()?, Some(7));

    // login itself goes out without credentials
    let login = &backend.hits()[0];
    assert_eq!(login.uri, "/api/user/login");
    assert!(login.authorization.is_none());
    Ok(())
}

#[tokio::test]
async fn rejected_login_keeps_session_empty() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;

    let response = console.session.login("kim@example.com", "wrong").await?;
    assert_eq!(response.status, 401);
    assert_eq!(response.data, json!({ "detail": "invalid credentials" }));
    assert!(console.session.access_token()?.is_none());
    assert_eq!(console.session.current_user_id()?, None);
    Ok(())
}

#[tokio::test]
async fn requests_carry_access_token_and_refresh_uses_refresh_token() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;
    console.session.login("kim@example.com", PASSWORD).await?;
    let access = console.session.access_token()?.expect("access token stored");

    console.employees.init().await?;
    let roster = backend.hits().into_iter().find(|hit| hit.uri == "/api/user").expect("roster fetched");
    assert_eq!(roster.authorization, Some(format!("Bearer {}", access)));

    let response = console.session.refresh_access_token().await?;
    assert_eq!(response.status, 200);
    let refresh = backend
        .hits()
        .into_iter()
        .find(|hit| hit.uri == "/api/user/token/refresh")
        .expect("refresh sent");
    assert_eq!(refresh.authorization, Some(format!("Bearer {}", REFRESH_TOKEN)));

    let renewed = console.session.access_token()?.expect("access token stored");
    assert_eq!(decode_token_subject(&renewed)?, 8);
    Ok(())
}

#[tokio::test]
async fn logged_out_requests_omit_authorization() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;
    console.session.login("kim@example.com", PASSWORD).await?;
    console.session.logout()?;

    console.employees.refresh().await?;
    let roster = backend.hits().into_iter().find(|hit| hit.uri == "/api/user").expect("roster fetched");
    assert!(roster.authorization.is_none());

    let refresh = console.session.refresh_access_token().await?;
    assert_eq!(refresh.status, 401);
    Ok(())
}

#[tokio::test]
async fn user_info_is_fetched_and_written_to_session_storage() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;

    let profile = console.accounts.user_info(7).await?;
    assert_eq!(profile, json!({ "id": 7, "name": "Kim" }));

    // the cache is read under a different key, so a second lookup hits the server again
    console.accounts.user_info(7).await?;
    assert_eq!(backend.hits_to("GET", "/api/user/7"), 2);

    let missing = console.accounts.user_info(99).await;
    assert!(matches!(missing, Err(ClientError::UnexpectedStatus { status: 404, .. })));
    Ok(())
}

#[tokio::test]
async fn registration_is_sent_without_credentials() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;
    console.session.login("kim@example.com", PASSWORD).await?;

    let registration = UserRegister {
        email: "park@example.com".to_string(),
        password: "pw-1234!".to_string(),
        name: "Park".to_string(),
    };
    let response = console.session.register(&registration).await?;
    assert_eq!(response.status, 201);

    let sent = backend.hits().into_iter().rev().find(|hit| hit.method == "POST" && hit.uri == "/api/user");
    assert!(sent.expect("registration sent").authorization.is_none());

    let duplicate = UserRegister {
        email: "kim@example.com".to_string(),
        ..registration
    };
    let response = console.session.register(&duplicate).await?;
    assert_eq!(response.status, 400);
    Ok(())
}
