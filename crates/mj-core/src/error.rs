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

use thiserror::Error;

/// The main error type for mj-* crates
///
/// Fetch failures never escape the pipeline as `Err`; they are rendered with
/// `to_string()` into the `error` field of a `RawDocument` or `Table`. The
/// display strings below are therefore part of the output contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// The CSV location could not be understood
  #[error("Invalid location: {0}")]
  Location(String),

  /// Non-success HTTP status
  #[error("Fetch failed: {0}")]
  Status(u16),

  /// Network/transport failure, carries the underlying message
  #[error("{0}")]
  Transport(String),

  /// Local file read failure
  #[error("{0}")]
  Io(String),

  /// Retrieval succeeded but there was nothing to parse
  #[error("CSV empty")]
  EmptySource,

  /// Failure without a usable message
  #[error("Unknown error")]
  Unknown,
}

impl Error {
  /// Wrap a transport message, falling back to [`Error::Unknown`] when it is blank.
  pub fn transport(message: impl Into<String>) -> Self {
    let message = message.into();
    if message.trim().is_empty() { Error::Unknown } else { Error::Transport(message) }
  }
}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Self {
    let message = err.to_string();
    if message.trim().is_empty() { Error::Unknown } else { Error::Io(message) }
  }
}

/// Result type alias for mj-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_display() {
    assert_eq!(Error::Status(404).to_string(), "Fetch failed: 404");
    assert_eq!(Error::Status(503).to_string(), "Fetch failed: 503");
  }

  #[test]
  fn test_empty_source_display() {
    assert_eq!(Error::EmptySource.to_string(), "CSV empty");
  }

  #[test]
  fn test_transport_keeps_message() {
    let err = Error::transport("connection refused");
    assert_eq!(err.to_string(), "connection refused");
  }

  #[test]
  fn test_blank_transport_is_unknown() {
    assert_eq!(Error::transport("  "), Error::Unknown);
    assert_eq!(Error::Unknown.to_string(), "Unknown error");
  }

  #[test]
  fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = Error::from(io_err);
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "file missing");
  }

  #[test]
  fn test_config_display() {
    let err = Error::Config("Invalid MJ_TIMEOUT_SECS".to_string());
    assert_eq!(err.to_string(), "Configuration error: Invalid MJ_TIMEOUT_SECS");
  }
}
