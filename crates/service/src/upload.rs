//! Client for the external file host (UploadThing). The app stores only
//! public URLs, so deletion of stale files is the single server-side call.

use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct UploadClient {
    http: Client,
    api_key: String,
    api_url: String,
}

impl UploadClient {
    pub fn new(cfg: &configs::UploadConfig) -> Self {
        Self {
            http: Client::new(),
            api_key: cfg.api_key.clone(),
            api_url: cfg.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn delete_file(&self, file_key: &str) -> Result<(), ServiceError> {
        let url = format!("{}/v6/deleteFiles", self.api_url);
        let res = self
            .http
            .post(&url)
            .header("X-Uploadthing-Api-Key", &self.api_key)
            .json(&json!({ "fileKeys": [file_key] }))
            .send()
            .await
            .map_err(|e| ServiceError::Upload(e.to_string()))?;
        if !res.status().is_success() {
            return Err(ServiceError::Upload(format!("delete returned status {}", res.status())));
        }
        info!(file_key, "deleted uploaded file");
        Ok(())
    }
}

/// File keys are the substring after the last `/` of the public URL. The
/// provider never appends query strings, so none are stripped here.
pub fn file_key_from_url(url: &str) -> Option<&str> {
    let key = url.rsplit('/').next()?;
    if key.is_empty() { None } else { Some(key) }
}

#[cfg(test)]
mod tests {
    use super::file_key_from_url;

    #[test]
    fn key_is_last_path_segment() {
        assert_eq!(file_key_from_url("https://utfs.io/f/abc123"), Some("abc123"));
        assert_eq!(file_key_from_url("https://2jc6rnrlfu.ufs.sh/f/xyz"), Some("xyz"));
    }

    #[test]
    fn trailing_slash_yields_nothing() {
        assert_eq!(file_key_from_url("https://utfs.io/f/"), None);
    }

    #[test]
    fn bare_key_passes_through() {
        assert_eq!(file_key_from_url("abc123"), Some("abc123"));
    }

    // Known limitation carried over from the dashboard helpers: query
    // strings stay glued to the key.
    #[test]
    fn query_string_is_not_stripped() {
        assert_eq!(file_key_from_url("https://utfs.io/f/abc?x=1"), Some("abc?x=1"));
    }
}
