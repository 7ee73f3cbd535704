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

//! # mj-core
//!
//! Shared types for the Market Journal CSV pipeline: configuration, the error
//! taxonomy, CSV locations and the parsed [`Table`].

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SourceConfig};
pub use error::{Error, Result};
pub use types::{
  Location, RawDocument, Row, Table, TableState, DATE_COLUMN, MISSING_CELL, NO_DATA_PLACEHOLDER,
};

/// Host serving raw repository files
pub const DEFAULT_RAW_HOST: &str = "raw.githubusercontent.com";

/// Repository coordinates of the published journal
pub const DEFAULT_OWNER: &str = "zerradwan";
pub const DEFAULT_REPO: &str = "MarketJournal";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_CSV_PATH: &str = "data/etf_prices_log.csv";

/// Indicator columns the collection job writes, in display order
pub const INDICATOR_COLUMNS: [&str; 15] = [
  // FX
  "EURO/USD",
  "STG/USD",
  "USD/YEN",
  // Indices
  "NIKKEI",
  "DAX",
  "FTSE",
  "DOW",
  "S&P",
  // 10Y government yields
  "JAPAN 10 YR (%)",
  "GERMAN 10 YR (%)",
  "UK 10 YR (%)",
  "US 10 YR (%)",
  // Commodities and crypto
  "GOLD",
  "BRENT CRUDE",
  "BITCOIN",
];
