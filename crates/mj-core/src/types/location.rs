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

//! Where the journal CSV lives, and what a single retrieval hands back

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Location of the CSV resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
  /// HTTP(S) resource, fetched with a plain GET
  Remote(Url),

  /// Static file on the local filesystem
  Local(PathBuf),
}

impl Location {
  /// Interpret a user supplied string as a location.
  ///
  /// `http://` and `https://` strings become [`Location::Remote`], `file://`
  /// URLs and everything else become [`Location::Local`].
  pub fn parse(raw: &str) -> Result<Self> {
    let raw = raw.trim();
    if raw.is_empty() {
      return Err(Error::Location("location is empty".to_string()));
    }

    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
      let url = Url::parse(raw).map_err(|e| Error::Location(format!("{}: {}", raw, e)))?;
      return Ok(Location::Remote(url));
    }

    if lower.starts_with("file://") {
      let url = Url::parse(raw).map_err(|e| Error::Location(format!("{}: {}", raw, e)))?;
      let path = url
        .to_file_path()
        .map_err(|_| Error::Location(format!("{}: not a local file path", raw)))?;
      return Ok(Location::Local(path));
    }

    Ok(Location::Local(PathBuf::from(raw)))
  }

  pub fn is_remote(&self) -> bool {
    matches!(self, Location::Remote(_))
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Location::Remote(url) => write!(f, "{}", url),
      Location::Local(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Unparsed CSV text from one retrieval, plus the failure if there was one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
  /// Response body; empty when the retrieval failed
  pub body: String,

  /// Human readable failure message
  pub error: Option<String>,
}

impl RawDocument {
  pub fn ok(body: impl Into<String>) -> Self {
    Self { body: body.into(), error: None }
  }

  /// A failed retrieval. Blank messages are replaced by the generic "Unknown error".
  pub fn failed(err: &Error) -> Self {
    let message = err.to_string();
    let message =
      if message.trim().is_empty() { Error::Unknown.to_string() } else { message };
    Self { body: String::new(), error: Some(message) }
  }

  pub fn is_ok(&self) -> bool {
    self.error.is_none()
  }
}

impl From<Result<String>> for RawDocument {
  fn from(result: Result<String>) -> Self {
    match result {
      Ok(body) => RawDocument::ok(body),
      Err(err) => RawDocument::failed(&err),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_https_location() {
    let location =
      Location::parse("https://raw.githubusercontent.com/o/r/main/data/log.csv").unwrap();
    assert!(location.is_remote());
    assert_eq!(location.to_string(), "https://raw.githubusercontent.com/o/r/main/data/log.csv");
  }

  #[test]
  fn test_parse_plain_path() {
    let location = Location::parse("./data/etf_prices_log.csv").unwrap();
    assert_eq!(location, Location::Local(PathBuf::from("./data/etf_prices_log.csv")));
  }

  #[cfg(unix)]
  #[test]
  fn test_parse_file_url() {
    let location = Location::parse("file:///tmp/journal.csv").unwrap();
    assert_eq!(location, Location::Local(PathBuf::from("/tmp/journal.csv")));
  }

  #[test]
  fn test_parse_empty_location() {
    assert!(matches!(Location::parse("   "), Err(Error::Location(_))));
  }

  #[test]
  fn test_parse_bad_url() {
    assert!(matches!(Location::parse("https://"), Err(Error::Location(_))));
  }

  #[test]
  fn test_failed_document_carries_message() {
    let doc = RawDocument::failed(&Error::Status(404));
    assert!(!doc.is_ok());
    assert!(doc.body.is_empty());
    assert_eq!(doc.error.as_deref(), Some("Fetch failed: 404"));
  }

  #[test]
  fn test_failed_document_blank_message() {
    let doc = RawDocument::failed(&Error::Io(String::new()));
    assert_eq!(doc.error.as_deref(), Some("Unknown error"));
  }

  #[test]
  fn test_from_result() {
    let doc: RawDocument = Ok("date,close".to_string()).into();
    assert_eq!(doc, RawDocument::ok("date,close"));
  }
}
