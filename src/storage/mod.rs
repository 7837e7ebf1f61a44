use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// Read-only view of the platform's object storage. Uploads happen in the
/// web app's own flow; this service only downloads by path.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn download(&self, path: &str) -> AppResult<Vec<u8>>;
}

/// Storage client for an HTTP object store exposing
/// `GET {base_url}/object/{path}` with bearer-key auth.
pub struct HttpObjectStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: SecretString,
}

impl HttpObjectStorage {
    pub fn new(base_url: &str, service_key: SecretString) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        })
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn download(&self, path: &str) -> AppResult<Vec<u8>> {
        let url = format!("{}/object/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.service_key.expose_secret())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("storage read failed for '{}': {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "storage read failed for '{}': HTTP {}",
                path,
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("storage read failed for '{}': {}", path, e)))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpObjectStorage>();
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let storage = HttpObjectStorage::new(
            "http://localhost:54321/storage/v1/",
            SecretString::from("key".to_string()),
        )
        .unwrap();
        assert_eq!(storage.base_url, "http://localhost:54321/storage/v1");
    }
}
