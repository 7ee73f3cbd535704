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

//! Fetch + parse pipeline
//!
//! One call is one render's worth of work: a single read through the
//! configured [`CsvSource`], then a parse. Nothing is cached between calls,
//! so a failed load is retried simply by loading again.

use crate::table_parser::TableParser;
use mj_client::CsvSource;
use mj_core::{Location, Table, TableState};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct TableLoader {
  source: Arc<dyn CsvSource>,
  parser: TableParser,
}

impl TableLoader {
  pub fn new(source: Arc<dyn CsvSource>) -> Self {
    Self { source, parser: TableParser::new() }
  }

  /// Retrieve and parse the journal at `location`
  #[instrument(skip(self), fields(location = %location))]
  pub async fn load(&self, location: &Location) -> Table {
    let doc = self.source.fetch_csv(location).await;
    let table = self.parser.parse_document(&doc);

    match (table.error(), table.state()) {
      (Some(message), _) => warn!("Journal unavailable: {}", message),
      (None, TableState::Empty) => info!("Journal has headers but no rows yet"),
      (None, TableState::Populated) => info!(
        "Loaded {} rows across {} columns",
        table.rows().len(),
        table.headers().len()
      ),
    }

    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use mj_client::Transport;
  use mj_core::{Config, Error, RawDocument};
  use pretty_assertions::assert_eq;
  use std::path::PathBuf;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use wiremock::matchers::method;
  use wiremock::{Mock, MockServer, ResponseTemplate};

  /// Serves a fixed document and counts reads
  struct FixedSource {
    doc: RawDocument,
    reads: AtomicUsize,
  }

  impl FixedSource {
    fn new(doc: RawDocument) -> Arc<Self> {
      Arc::new(Self { doc, reads: AtomicUsize::new(0) })
    }
  }

  #[async_trait]
  impl CsvSource for FixedSource {
    async fn fetch_csv(&self, _location: &Location) -> RawDocument {
      self.reads.fetch_add(1, Ordering::SeqCst);
      self.doc.clone()
    }
  }

  fn local() -> Location {
    Location::Local(PathBuf::from("data/etf_prices_log.csv"))
  }

  #[tokio::test]
  async fn test_load_orders_rows() {
    let source = FixedSource::new(RawDocument::ok(
      "date,DOW,S&P\n2024-01-03,37430,4704\n2024-01-01,37715,4742\n2024-01-02,37689,4769\n",
    ));
    let loader = TableLoader::new(source.clone());

    let table = loader.load(&local()).await;

    assert_eq!(table.column("date"), vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(table.state(), TableState::Populated);
    assert_eq!(source.reads.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn test_load_reads_every_time() {
    let source = FixedSource::new(RawDocument::ok("date,GOLD\n2024-01-01,2063.7\n"));
    let loader = TableLoader::new(source.clone());

    let first = loader.load(&local()).await;
    let second = loader.load(&local()).await;

    assert_eq!(first, second);
    assert_eq!(source.reads.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn test_load_fetch_failure() {
    let source = FixedSource::new(RawDocument::failed(&Error::transport("connection reset")));
    let table = TableLoader::new(source).load(&local()).await;

    assert_eq!(table, Table::failed("connection reset"));
  }

  #[tokio::test]
  async fn test_load_empty_body() {
    let source = FixedSource::new(RawDocument::ok("   \n"));
    let table = TableLoader::new(source).load(&local()).await;

    assert_eq!(table.error(), Some("CSV empty"));
    assert!(table.headers().is_empty());
  }

  #[tokio::test]
  async fn test_load_http_404_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(404))
      .expect(1)
      .mount(&server)
      .await;

    let transport = Transport::new(&Config::default()).unwrap();
    let loader = TableLoader::new(Arc::new(transport));
    let route = "/zerradwan/MarketJournal/main/data/etf_prices_log.csv";
    let location =
      Location::Remote(url::Url::parse(&format!("{}{}", server.uri(), route)).unwrap());

    let table = loader.load(&location).await;

    assert_eq!(table.error(), Some("Fetch failed: 404"));
    assert!(table.headers().is_empty());
    assert!(table.rows().is_empty());
  }
}
