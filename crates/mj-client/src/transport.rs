/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Transport layer for retrieving the journal CSV

use crate::source::CsvSource;
use async_trait::async_trait;
use mj_core::{Config, Error, Location, RawDocument, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Reads CSV text from HTTP(S) or the local filesystem.
///
/// Every call performs exactly one read, with no retry and no backoff.
/// Remote requests carry `Cache-Control: no-cache` and `Pragma: no-cache` so
/// intermediate caches revalidate and each fetch observes the latest content.
pub struct Transport {
  client: Client,
  timeout: Option<Duration>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = config.timeout_secs.map(Duration::from_secs);

    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder
      .build()
      .map_err(|e| Error::transport(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  /// Request timeout, if one was configured
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }

  /// GET the URL and return the body as text
  #[instrument(skip(self), fields(url = %url))]
  pub async fn fetch_remote(&self, url: &Url) -> Result<String> {
    let response = self
      .client
      .get(url.clone())
      .header(CACHE_CONTROL, "no-cache")
      .header(PRAGMA, "no-cache")
      .send()
      .await
      .map_err(|e| Error::transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Status(status.as_u16()));
    }
    debug!("Request successful with status: {}", status);

    let text = response
      .text()
      .await
      .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());
    Ok(text)
  }

  /// Read a local static file as text
  #[instrument(skip(self), fields(path = %path.display()))]
  pub async fn read_local(&self, path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
      error!("Failed to read {}: {}", path.display(), e);
      Error::from(e)
    })?;

    debug!("Read {} bytes", text.len());
    Ok(text)
  }
}

#[async_trait]
impl CsvSource for Transport {
  async fn fetch_csv(&self, location: &Location) -> RawDocument {
    let result = match location {
      Location::Remote(url) => self.fetch_remote(url).await,
      Location::Local(path) => self.read_local(path).await,
    };

    match result {
      Ok(body) => {
        info!("Fetched CSV from {}", location);
        RawDocument::ok(body)
      }
      Err(e) => {
        warn!("Fetch from {} failed: {}", location, e);
        RawDocument::failed(&e)
      }
    }
  }
}
