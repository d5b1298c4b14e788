//! Store connection configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "gradebook.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL database file, or `:memory:`. Used when no remote is set.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL endpoint (e.g., `libsql://gradebook-school.turso.io`).
    /// Host and database name are both carried by the URL.
    #[serde(default)]
    pub url: String,

    /// Credential for the remote endpoint.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote endpoint is fully configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Host portion of the remote URL, without scheme, port, or path.
    pub fn host(&self) -> Option<&str> {
        let rest = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let host = rest.split(['/', ':', '?']).next()?;
        if host.is_empty() { None } else { Some(host) }
    }

    /// Human-readable location of the configured store. Never includes the token.
    pub fn location(&self) -> String {
        if self.is_remote() {
            self.url.clone()
        } else {
            self.path.clone()
        }
    }
}
