use std::sync::LazyLock;

use anyhow::{Result, bail};

use crate::config::GithubConfig;

pub mod contents;
pub mod gist;

pub(crate) static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

pub(crate) const ACCEPT_HEADER: &str = "application/vnd.github+json";
pub(crate) const USER_AGENT: &str = "herald-announcer";

/// Where the announcement text lives. Picked once at startup from the
/// environment; a deployment runs exactly one variant.
#[derive(Debug, Clone)]
pub enum AnnouncementStore {
    Gist {
        gist_id: String,
        file_name: String,
    },
    RepoFile {
        owner: String,
        repo: String,
        path: String,
    },
}

impl AnnouncementStore {
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        if config.token.is_empty() {
            bail!("GITHUB_TOKEN not configured");
        }

        if let Some(gist_id) = &config.gist_id {
            return Ok(Self::Gist {
                gist_id: gist_id.clone(),
                file_name: config.file_path.clone(),
            });
        }

        match (&config.repo_owner, &config.repo_name) {
            (Some(owner), Some(repo)) => Ok(Self::RepoFile {
                owner: owner.clone(),
                repo: repo.clone(),
                path: config.file_path.clone(),
            }),
            _ => bail!("no announcement backend configured (set GIST_ID or REPO_OWNER/REPO_NAME)"),
        }
    }

    pub async fn publish(&self, config: &GithubConfig, text: &str) -> Result<()> {
        match self {
            Self::Gist { gist_id, file_name } => {
                gist::update_gist(config, gist_id, file_name, text).await
            },
            Self::RepoFile { owner, repo, path } => {
                contents::put_file(config, owner, repo, path, text).await
            },
        }
    }
}

/// First 200 characters of an upstream response body, enough to diagnose
/// without dumping whole error pages into our responses.
pub(crate) fn error_snippet(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_config() -> GithubConfig {
        GithubConfig {
            token: "token".into(),
            ..GithubConfig::default()
        }
    }

    #[test]
    fn missing_token_is_a_startup_error() {
        let config = GithubConfig {
            token: String::new(),
            gist_id: Some("abc".into()),
            ..GithubConfig::default()
        };

        assert!(AnnouncementStore::from_config(&config).is_err());
    }

    #[test]
    fn gist_id_selects_gist_variant() {
        let config = GithubConfig {
            gist_id: Some("abc".into()),
            ..github_config()
        };

        let store = AnnouncementStore::from_config(&config).unwrap();

        assert!(matches!(store, AnnouncementStore::Gist { .. }));
    }

    #[test]
    fn repo_coordinates_select_repo_file_variant() {
        let config = GithubConfig {
            repo_owner: Some("octocat".into()),
            repo_name: Some("site".into()),
            ..github_config()
        };

        let store = AnnouncementStore::from_config(&config).unwrap();

        assert!(matches!(store, AnnouncementStore::RepoFile { .. }));
    }

    #[test]
    fn no_backend_is_a_startup_error() {
        assert!(AnnouncementStore::from_config(&github_config()).is_err());
    }

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let long = "é".repeat(300);

        assert_eq!(error_snippet(&long).chars().count(), 200);
        assert_eq!(error_snippet("short"), "short");
    }
}
