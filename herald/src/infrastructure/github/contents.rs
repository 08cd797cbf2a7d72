use anyhow::{Result, bail};
use base64::prelude::*;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::{ACCEPT_HEADER, CLIENT, USER_AGENT, error_snippet};
use crate::config::GithubConfig;

#[derive(Debug, Deserialize)]
struct FileMetadata {
    sha: String,
}

/// The contents API rejects an update of an existing file unless the request
/// carries the file's current sha, so every write is a read-modify-write.
/// 404 means first write. Anything else non-success is a hard failure rather
/// than "no sha" -- proceeding blind could clobber unrelated content.
async fn fetch_existing_sha(config: &GithubConfig, url: &str) -> Result<Option<String>> {
    let resp = CLIENT
        .get(url)
        .bearer_auth(&config.token)
        .header("Accept", ACCEPT_HEADER)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!(
            "fetching current file sha failed ({status}): {}",
            error_snippet(&body)
        );
    }

    let meta: FileMetadata = resp.json().await?;

    Ok(Some(meta.sha))
}

pub async fn put_file(
    config: &GithubConfig,
    owner: &str,
    repo: &str,
    path: &str,
    text: &str,
) -> Result<()> {
    let url = format!("{}/repos/{owner}/{repo}/contents/{path}", config.api_base);

    let sha = fetch_existing_sha(config, &url).await?;

    tracing::debug!(
        "updating {owner}/{repo}/{path} (sha: {})",
        sha.as_deref().unwrap_or("none")
    );

    let mut payload = json!({
        "message": format!("update {path} ({})", chrono::Utc::now().to_rfc3339()),
        "content": BASE64_STANDARD.encode(text),
    });
    if let Some(sha) = sha {
        payload["sha"] = json!(sha);
    }

    let resp = CLIENT
        .put(&url)
        .bearer_auth(&config.token)
        .header("Accept", ACCEPT_HEADER)
        .header("User-Agent", USER_AGENT)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!(
            "file content update failed ({status}): {}",
            error_snippet(&body)
        );
    }

    Ok(())
}
