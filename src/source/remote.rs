use std::time::Duration;

use crate::config::AutotagsConfig;

use super::TagSource;
use super::error::SourceError;

/// Blocking HTTP source for the remote tag list
///
/// One GET per session, bounded by the configured timeout, no retry.
pub struct RemoteTagSource {
    http: reqwest::blocking::Client,
    url: String,
}

impl RemoteTagSource {
    /// Build a source for the given endpoint
    ///
    /// # Errors
    /// Returns `SourceError` if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Build a source from the application configuration
    ///
    /// # Errors
    /// Returns `SourceError` if the HTTP client cannot be constructed.
    pub fn from_config(config: &AutotagsConfig) -> Result<Self, SourceError> {
        Self::new(config.url.clone(), config.timeout())
    }

    /// The endpoint this source fetches from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TagSource for RemoteTagSource {
    fn fetch(&self) -> Result<String, SourceError> {
        let response = self.http.get(&self.url).send()?;
        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status()));
        }
        Ok(response.text()?)
    }
}
