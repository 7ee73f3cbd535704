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

//! Configuration management for the Market Journal pipeline
//!
//! The CSV location is configuration, not a compiled-in constant: the
//! defaults point at the published journal, and every part can be overridden
//! from the environment (or a `.env` file).

use crate::error::{Error, Result};
use crate::types::Location;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Where the journal CSV is read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
  /// Host serving raw repository files
  pub host: String,

  /// Repository owner (user or organisation)
  pub owner: String,

  /// Repository name
  pub repo: String,

  /// Branch the collection job commits to
  pub branch: String,

  /// Path of the CSV inside the repository
  pub csv_path: String,

  /// Full URL, replaces the host/owner/repo/branch/path pattern
  pub url: Option<String>,

  /// Local static file, read instead of fetching
  pub local_path: Option<String>,
}

impl Default for SourceConfig {
  fn default() -> Self {
    Self {
      host: crate::DEFAULT_RAW_HOST.to_string(),
      owner: crate::DEFAULT_OWNER.to_string(),
      repo: crate::DEFAULT_REPO.to_string(),
      branch: crate::DEFAULT_BRANCH.to_string(),
      csv_path: crate::DEFAULT_CSV_PATH.to_string(),
      url: None,
      local_path: None,
    }
  }
}

impl SourceConfig {
  /// `https://<host>/<owner>/<repo>/<branch>/<path-to-csv>`
  pub fn raw_url(&self) -> String {
    format!(
      "https://{}/{}/{}/{}/{}",
      self.host.trim_end_matches('/'),
      self.owner,
      self.repo,
      self.branch,
      self.csv_path.trim_start_matches('/')
    )
  }

  /// Resolve the configured location.
  ///
  /// A local path wins over the URL pattern; setting both an explicit URL
  /// and a local path is rejected.
  pub fn location(&self) -> Result<Location> {
    match (&self.url, &self.local_path) {
      (Some(_), Some(_)) => Err(Error::Config(
        "set only one of MJ_CSV_URL and MJ_CSV_PATH".to_string(),
      )),
      (None, Some(path)) => Location::parse(path),
      (Some(url), None) => Location::parse(url),
      (None, None) => Location::parse(&self.raw_url()),
    }
  }
}

/// Main configuration struct for the pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// CSV source
  pub source: SourceConfig,

  /// Request timeout in seconds; `None` leaves reads unbounded
  pub timeout_secs: Option<u64>,

  /// User agent sent with remote fetches
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      source: SourceConfig::default(),
      timeout_secs: None,
      user_agent: format!("mj-client/{}", env!("CARGO_PKG_VERSION")),
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from any key lookup, falling back to defaults
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Config::default();
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let source = SourceConfig {
      host: get("MJ_HOST").unwrap_or(defaults.source.host),
      owner: get("MJ_OWNER").unwrap_or(defaults.source.owner),
      repo: get("MJ_REPO").unwrap_or(defaults.source.repo),
      branch: get("MJ_BRANCH").unwrap_or(defaults.source.branch),
      csv_path: get("MJ_CSV_FILE").unwrap_or(defaults.source.csv_path),
      url: get("MJ_CSV_URL"),
      local_path: get("MJ_CSV_PATH"),
    };

    let timeout_secs = get("MJ_TIMEOUT_SECS")
      .map(|v| v.parse::<u64>())
      .transpose()
      .map_err(|_| Error::Config("Invalid MJ_TIMEOUT_SECS".to_string()))?;

    let user_agent = get("MJ_USER_AGENT").unwrap_or(defaults.user_agent);

    Ok(Config { source, timeout_secs, user_agent })
  }

  /// The configured CSV location
  pub fn location(&self) -> Result<Location> {
    self.source.location()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use std::path::PathBuf;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn test_defaults_point_at_published_journal() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
      config.source.raw_url(),
      "https://raw.githubusercontent.com/zerradwan/MarketJournal/main/data/etf_prices_log.csv"
    );
    assert_eq!(config.timeout_secs, None);
    assert!(config.location().unwrap().is_remote());
  }

  #[test]
  fn test_pattern_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("MJ_OWNER", "someone"),
      ("MJ_REPO", "journal"),
      ("MJ_BRANCH", "data"),
      ("MJ_CSV_FILE", "/prices.csv"),
    ]))
    .unwrap();
    assert_eq!(
      config.source.raw_url(),
      "https://raw.githubusercontent.com/someone/journal/data/prices.csv"
    );
  }

  #[test]
  fn test_local_path_location() {
    let config =
      Config::from_lookup(lookup_from(&[("MJ_CSV_PATH", "public/etf_prices_log.csv")])).unwrap();
    assert_eq!(
      config.location().unwrap(),
      Location::Local(PathBuf::from("public/etf_prices_log.csv"))
    );
  }

  #[test]
  fn test_url_and_path_conflict() {
    let config = Config::from_lookup(lookup_from(&[
      ("MJ_CSV_URL", "https://example.com/log.csv"),
      ("MJ_CSV_PATH", "log.csv"),
    ]))
    .unwrap();
    assert!(matches!(config.location(), Err(Error::Config(_))));
  }

  #[test]
  fn test_timeout() {
    let config = Config::from_lookup(lookup_from(&[("MJ_TIMEOUT_SECS", "15")])).unwrap();
    assert_eq!(config.timeout_secs, Some(15));

    let err = Config::from_lookup(lookup_from(&[("MJ_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(err, Error::Config("Invalid MJ_TIMEOUT_SECS".to_string()));
  }

  #[test]
  fn test_blank_values_use_defaults() {
    let config =
      Config::from_lookup(lookup_from(&[("MJ_BRANCH", "  "), ("MJ_CSV_URL", "")])).unwrap();
    assert_eq!(config.source.branch, "main");
    assert_eq!(config.source.url, None);
  }
}
