use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub allowed_origin: String,
    pub admin_password: String,
    pub github: GithubConfig,
    pub webhook: DiscordWebhookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub api_base: String,
    pub token: String,
    pub gist_id: Option<String>,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordWebhookConfig {
    pub announcement: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            allowed_origin: "*".into(),
            admin_password: String::new(),
            github: GithubConfig::default(),
            webhook: DiscordWebhookConfig::default(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".into(),
            token: String::new(),
            gist_id: None,
            repo_owner: None,
            repo_name: None,
            file_path: "anc.txt".into(),
        }
    }
}

impl Default for DiscordWebhookConfig {
    fn default() -> Self {
        Self { announcement: None }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse()?;
        }
        if let Ok(allowed_origin) = std::env::var("ALLOWED_ORIGIN") {
            config.allowed_origin = allowed_origin;
        }
        if let Ok(admin_password) = std::env::var("ADMIN_PASSWORD") {
            config.admin_password = admin_password;
        }

        if let Ok(api_base) = std::env::var("GITHUB_API_BASE") {
            config.github.api_base = api_base;
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            config.github.token = token;
        }
        if let Ok(gist_id) = std::env::var("GIST_ID") {
            config.github.gist_id = Some(gist_id);
        }
        if let Ok(repo_owner) = std::env::var("REPO_OWNER") {
            config.github.repo_owner = Some(repo_owner);
        }
        if let Ok(repo_name) = std::env::var("REPO_NAME") {
            config.github.repo_name = Some(repo_name);
        }
        if let Ok(file_path) = std::env::var("FILE_PATH") {
            config.github.file_path = file_path;
        }

        if let Ok(webhook_url) = std::env::var("DISCORD_WEBHOOK_URL") {
            config.webhook.announcement = Some(webhook_url);
        }

        Ok(config)
    }
}
