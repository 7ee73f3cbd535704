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

//! Canonical chronological ordering of journal rows
//!
//! Rows are ordered ascending by their `date` cell. Cells that are missing or
//! cannot be read as a date sort after every dated row and keep their source
//! order relative to each other. Equal dates keep source order too.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use mj_core::Row;

const DATETIME_FORMATS: [&str; 5] = [
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Read a date cell as a point in time (UTC for offset-carrying input).
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.naive_utc());
  }

  for fmt in &DATETIME_FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
      return Some(dt);
    }
  }

  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Sort key: dated rows first (ascending), undated rows last
fn order_key(row: &Row) -> (bool, Option<NaiveDateTime>) {
  let date = row.date().and_then(parse_date);
  (date.is_none(), date)
}

/// Reorder `rows` in place; returns how many rows had no readable date.
pub fn sort_chronologically(rows: &mut [Row]) -> usize {
  // sort_by_cached_key is stable and parses each date once
  rows.sort_by_cached_key(order_key);
  rows.iter().rev().take_while(|r| order_key(r).0).count()
}
