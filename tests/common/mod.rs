#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use github_info_widget::{ClientConfig, GitHubClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fixed "current time" shared by the tests
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

pub fn repository_json() -> Value {
    json!({
        "id": 1296269,
        "name": "demo",
        "full_name": "octo/demo",
        "description": "A <demo> repository",
        "homepage": "https://octo.example",
        "owner": {
            "login": "octo",
            "id": 1,
            "avatar_url": "https://avatars.example/octo.png"
        },
        "watchers": 42,
        "forks": 7,
        "html_url": "https://github.com/octo/demo",
        "created_at": "2021-03-05T10:00:00Z",
        "pushed_at": "2024-06-12T12:00:00Z"
    })
}

pub fn commit_json(login: Option<&str>, date: DateTime<Utc>, message: &str) -> Value {
    let committer = match login {
        Some(login) => json!({
            "login": login,
            "avatar_url": format!("https://avatars.example/{}.png", login)
        }),
        None => Value::Null,
    };
    let signature = json!({
        "name": "Octo Cat",
        "email": "octo@example.com",
        "date": date.to_rfc3339()
    });

    json!({
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "html_url": "https://github.com/octo/demo/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "committer": committer,
        "commit": {
            "message": message,
            "author": signature.clone(),
            "committer": signature
        }
    })
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(ClientConfig {
        api_url: server.uri(),
        ..Default::default()
    })
    .expect("Failed to create client")
}

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
