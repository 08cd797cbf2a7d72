use std::collections::HashMap;

use anyhow::{Result, bail};
use serde_json::json;

use super::{ACCEPT_HEADER, CLIENT, USER_AGENT, error_snippet};
use crate::config::GithubConfig;

/// Replaces the named file's content wholesale; the gist API does no diffing
/// on a partial update.
pub async fn update_gist(
    config: &GithubConfig,
    gist_id: &str,
    file_name: &str,
    text: &str,
) -> Result<()> {
    let url = format!("{}/gists/{gist_id}", config.api_base);

    tracing::debug!("updating gist {gist_id} ({file_name})");

    let files = HashMap::from([(file_name, json!({ "content": text }))]);

    let resp = CLIENT
        .patch(&url)
        .bearer_auth(&config.token)
        .header("Accept", ACCEPT_HEADER)
        .header("User-Agent", USER_AGENT)
        .json(&json!({ "files": files }))
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("gist update failed ({status}): {}", error_snippet(&body));
    }

    Ok(())
}
