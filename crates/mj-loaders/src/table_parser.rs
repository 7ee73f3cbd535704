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

//! CSV table parser for the daily indicator journal
//!
//! The journal is plain comma separated text: the first non-empty line names
//! the columns, every later line is one day. Quoting and escaping are not
//! recognised, so a comma always separates fields.
//!
//! The parser is lenient about structure:
//! - empty lines anywhere are dropped; a line of only spaces is a row of `""` cells
//! - short rows get `""` for the missing trailing columns
//! - fields beyond the header count are ignored
//! - a duplicated header keeps its position, the later column's value wins
//! - rows are put in ascending date order, undated rows last
//!
//! It never returns an error: degenerate input yields a table whose `error`
//! field says what went wrong.

use crate::date_order::sort_chronologically;
use mj_core::{Error, RawDocument, Row, Table, DATE_COLUMN};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser;

impl TableParser {
  pub fn new() -> Self {
    Self
  }

  /// Parse raw CSV text; `None` is treated like an empty document.
  pub fn parse(&self, raw: Option<&str>) -> Table {
    panic::catch_unwind(AssertUnwindSafe(|| self.parse_text(raw.unwrap_or_default())))
      .unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        warn!("CSV parse aborted: {}", message);
        Table::failed(message)
      })
  }

  /// Parse a retrieved document, carrying a fetch failure through as the table error
  pub fn parse_document(&self, doc: &RawDocument) -> Table {
    match &doc.error {
      Some(message) => Table::failed(message.clone()),
      None => self.parse(Some(&doc.body)),
    }
  }

  fn parse_text(&self, raw: &str) -> Table {
    let lines: Vec<&str> = raw.trim().lines().filter(|line| !line.is_empty()).collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
      debug!("CSV has no content");
      return Table::failed(Error::EmptySource.to_string());
    };

    let headers: Vec<String> = split_fields(header_line).map(str::to_string).collect();

    let mut rows: Vec<Row> = data_lines.iter().map(|line| build_row(&headers, line)).collect();

    if headers.iter().any(|h| h == DATE_COLUMN) {
      let undated = sort_chronologically(&mut rows);
      if undated > 0 {
        warn!("{} of {} rows have no readable date; placed last", undated, rows.len());
      }
    } else {
      debug!("No '{}' column; keeping source order", DATE_COLUMN);
    }

    debug!("Parsed {} columns, {} rows", headers.len(), rows.len());
    Table::from_parts(headers, rows)
  }
}

/// Parse raw CSV text with the default parser
pub fn parse_table(raw: Option<&str>) -> Table {
  TableParser::new().parse(raw)
}

/// Parse a retrieved document with the default parser
pub fn parse_document(doc: &RawDocument) -> Table {
  TableParser::new().parse_document(doc)
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
  line.split(',').map(str::trim)
}

/// Zip one line against the headers: absent cells become `""`, extras are dropped.
fn build_row(headers: &[String], line: &str) -> Row {
  let mut fields = split_fields(line);
  let mut row = Row::with_capacity(headers.len());
  for header in headers {
    row.set(header.as_str(), fields.next().unwrap_or_default());
  }
  row
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  payload
    .downcast_ref::<&str>()
    .map(|s| s.to_string())
    .or_else(|| payload.downcast_ref::<String>().cloned())
    .filter(|s| !s.trim().is_empty())
    .unwrap_or_else(|| Error::Unknown.to_string())
}
