use std::path::PathBuf;

use chrono::Utc;

use crate::{management::StoreError, types::Token};

/// Persists the access token between command invocations.
///
/// There is deliberately no refresh handling: when the token runs out the
/// user authenticates again. `is_expired` only reports.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, StoreError> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(StoreError::Io)?;
        let token: Token = serde_json::from_str(&content).map_err(StoreError::Serde)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::Io)?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(StoreError::Serde)?;
        async_fs::write(path, json).await.map_err(StoreError::Io)
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("trackferry/cache/token.json");
        path
    }
}
