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

//! The parsed journal table handed to consumers
//!
//! Serializes to the output boundary shape:
//!
//! ```json
//! { "headers": ["date", "GOLD"], "rows": [{ "date": "2024-01-01", "GOLD": "2063.7" }], "error": null }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Name of the column used for canonical ordering
pub const DATE_COLUMN: &str = "date";

/// Shown by consumers in place of a cell the row does not carry
pub const MISSING_CELL: &str = "—";

/// Shown by consumers when a table has no rows and no error
pub const NO_DATA_PLACEHOLDER: &str = "No data yet.";

/// One data record keyed by header name.
///
/// Keys keep their first-seen order; setting an existing key overwrites the
/// value in place, which is how duplicate headers collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
  keys: Vec<String>,
  values: HashMap<String, String>,
}

impl Row {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self { keys: Vec::with_capacity(capacity), values: HashMap::with_capacity(capacity) }
  }

  /// Set `key` to `value`, overwriting any earlier value for the same key.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
    let key = key.into();
    if !self.values.contains_key(&key) {
      self.keys.push(key.clone());
    }
    self.values.insert(key, value.into());
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.values.get(key).map(String::as_str)
  }

  /// The raw `date` cell, if the row has one
  pub fn date(&self) -> Option<&str> {
    self.get(DATE_COLUMN)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.keys.iter().map(String::as_str)
  }

  /// `(key, value)` pairs in key order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.keys.iter().map(move |k| (k.as_str(), self.values[k].as_str()))
  }

  pub fn len(&self) -> usize {
    self.keys.len()
  }

  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut row = Row::new();
    for (key, value) in iter {
      row.set(key, value);
    }
    row
  }
}

impl Serialize for Row {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.keys.len()))?;
    for (key, value) in self.iter() {
      map.serialize_entry(key, value)?;
    }
    map.end()
  }
}

/// Pipeline state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
  /// No usable data: an error, no headers, or headers without rows
  Empty,
  /// Headers plus at least one row
  Populated,
}

/// Header list, ordered rows and an optional error message.
///
/// There are no mutators: a table is built once by the parser and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
  headers: Vec<String>,
  rows: Vec<Row>,
  error: Option<String>,
}

impl Table {
  /// A table from parsed parts.
  ///
  /// Each row is reshaped to carry exactly one value per distinct header, in
  /// header order: absent keys become `""`, keys outside the headers are
  /// dropped. Row order is kept as given, so callers sort before building.
  pub fn from_parts(headers: Vec<String>, rows: Vec<Row>) -> Self {
    let rows = rows
      .into_iter()
      .map(|row| {
        headers
          .iter()
          .map(|h| (h.as_str(), row.get(h).unwrap_or_default()))
          .collect::<Row>()
      })
      .collect();
    Self { headers, rows, error: None }
  }

  /// The degenerate table: no headers, no rows, an error message
  pub fn failed(message: impl Into<String>) -> Self {
    Self { headers: Vec::new(), rows: Vec::new(), error: Some(message.into()) }
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn rows(&self) -> &[Row] {
    &self.rows
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn state(&self) -> TableState {
    if self.error.is_some() || self.headers.is_empty() || self.rows.is_empty() {
      TableState::Empty
    } else {
      TableState::Populated
    }
  }

  /// True when consumers should render the "no data yet" placeholder row
  pub fn is_placeholder(&self) -> bool {
    self.rows.is_empty() && self.error.is_none()
  }

  /// The newest row, i.e. the last one in canonical order
  pub fn latest(&self) -> Option<&Row> {
    self.rows.last()
  }

  /// Values of one column in row order; empty if the header is unknown
  pub fn column(&self, header: &str) -> Vec<&str> {
    if !self.headers.iter().any(|h| h == header) {
      return Vec::new();
    }
    self.rows.iter().map(|r| r.get(header).unwrap_or_default()).collect()
  }

  /// Display value of a cell, [`MISSING_CELL`] when the row has no such key.
  ///
  /// An empty value is shown as-is; parsed rows fill short lines with `""`.
  pub fn cell<'a>(&self, row: &'a Row, header: &str) -> &'a str {
    row.get(header).unwrap_or(MISSING_CELL)
  }

  /// Well-known journal indicators that this table does not carry
  pub fn missing_indicators(&self) -> Vec<&'static str> {
    crate::INDICATOR_COLUMNS
      .iter()
      .copied()
      .filter(|indicator| !self.headers.iter().any(|h| h == indicator))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn sample() -> Table {
    let headers = vec!["date".to_string(), "GOLD".to_string(), "BITCOIN".to_string()];
    let rows = vec![
      Row::from_iter([("date", "2024-01-01"), ("GOLD", "2063.7"), ("BITCOIN", "")]),
      Row::from_iter([("date", "2024-01-02"), ("GOLD", "2058.1"), ("BITCOIN", "45000")]),
    ];
    Table::from_parts(headers, rows)
  }

  #[test]
  fn test_row_set_overwrites_in_place() {
    let mut row = Row::new();
    row.set("a", "1");
    row.set("b", "2");
    row.set("a", "3");
    assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(row.get("a"), Some("3"));
    assert_eq!(row.len(), 2);
  }

  #[test]
  fn test_row_unknown_key() {
    let row = Row::from_iter([("date", "2024-01-01")]);
    assert_eq!(row.get("close"), None);
    assert_eq!(row.date(), Some("2024-01-01"));
  }

  #[test]
  fn test_table_serializes_to_output_shape() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "headers": ["date", "GOLD", "BITCOIN"],
        "rows": [
          {"date": "2024-01-01", "GOLD": "2063.7", "BITCOIN": ""},
          {"date": "2024-01-02", "GOLD": "2058.1", "BITCOIN": "45000"}
        ],
        "error": null
      })
    );
  }

  #[test]
  fn test_row_serializes_in_key_order() {
    let row = Row::from_iter([("date", "2024-01-01"), ("DOW", "37715"), ("DAX", "16769")]);
    let text = serde_json::to_string(&row).unwrap();
    assert_eq!(text, r#"{"date":"2024-01-01","DOW":"37715","DAX":"16769"}"#);
  }

  #[test]
  fn test_from_parts_reshapes_rows_to_headers() {
    let headers = vec!["date".to_string(), "GOLD".to_string(), "GOLD".to_string()];
    let rows = vec![
      Row::from_iter([("GOLD", "2063.7"), ("extra", "x"), ("date", "2024-01-01")]),
      Row::from_iter([("date", "2024-01-02")]),
    ];
    let table = Table::from_parts(headers, rows);

    assert_eq!(
      table.rows(),
      [
        Row::from_iter([("date", "2024-01-01"), ("GOLD", "2063.7")]),
        Row::from_iter([("date", "2024-01-02"), ("GOLD", "")]),
      ]
    );
    assert_eq!(table.rows()[0].keys().collect::<Vec<_>>(), vec!["date", "GOLD"]);
  }

  #[test]
  fn test_failed_table() {
    let table = Table::failed("Fetch failed: 404");
    assert!(table.headers().is_empty());
    assert!(table.rows().is_empty());
    assert_eq!(table.error(), Some("Fetch failed: 404"));
    assert_eq!(table.state(), TableState::Empty);
    assert!(!table.is_placeholder());
  }

  #[test]
  fn test_states() {
    assert_eq!(sample().state(), TableState::Populated);

    let headers_only = Table::from_parts(vec!["date".to_string()], Vec::new());
    assert_eq!(headers_only.state(), TableState::Empty);
    assert!(headers_only.is_placeholder());
  }

  #[test]
  fn test_latest_and_column() {
    let table = sample();
    assert_eq!(table.latest().and_then(Row::date), Some("2024-01-02"));
    assert_eq!(table.column("GOLD"), vec!["2063.7", "2058.1"]);
    assert!(table.column("NIKKEI").is_empty());
  }

  #[test]
  fn test_cell_fallback() {
    let table = sample();
    let first = &table.rows()[0];
    assert_eq!(table.cell(first, "GOLD"), "2063.7");
    assert_eq!(table.cell(first, "BITCOIN"), "");
    assert_eq!(table.cell(first, "NIKKEI"), MISSING_CELL);
  }

  #[test]
  fn test_missing_indicators() {
    let missing = sample().missing_indicators();
    assert!(!missing.contains(&"GOLD"));
    assert!(!missing.contains(&"BITCOIN"));
    assert!(missing.contains(&"EURO/USD"));
    assert_eq!(missing.len(), crate::INDICATOR_COLUMNS.len() - 2);
  }
}
