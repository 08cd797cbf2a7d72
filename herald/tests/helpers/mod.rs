#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use herald::{
    config::{Config, DiscordWebhookConfig, GithubConfig},
    infrastructure::github::AnnouncementStore,
    routes::create_routes,
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_PASS: &str = "hunter2";

pub fn gist_config(api_base: &str) -> Config {
    Config {
        port: 0,
        allowed_origin: "*".into(),
        admin_password: ADMIN_PASS.into(),
        github: GithubConfig {
            api_base: api_base.into(),
            token: "test-token".into(),
            gist_id: Some("abc123".into()),
            repo_owner: None,
            repo_name: None,
            file_path: "anc.txt".into(),
        },
        webhook: DiscordWebhookConfig { announcement: None },
    }
}

pub fn repo_config(api_base: &str) -> Config {
    let mut config = gist_config(api_base);
    config.github.gist_id = None;
    config.github.repo_owner = Some("octocat".into());
    config.github.repo_name = Some("site".into());

    config
}

pub fn with_webhook(mut config: Config, url: String) -> Config {
    config.webhook.announcement = Some(url);

    config
}

pub fn app(config: Config) -> Router {
    let config = Arc::new(config);
    let store = AnnouncementStore::from_config(&config.github).expect("backend config");

    create_routes(&config).with_state(AppState::new(config, store))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub fn publish_request(pass: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/announcement")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(pass) = pass {
        builder = builder.header("x-admin-pass", pass);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
