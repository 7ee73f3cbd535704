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

//! # mj-loaders
//!
//! Turns the journal CSV into a [`Table`](mj_core::Table):
//! - [`table_parser`] normalizes raw text into headers and rows
//! - [`date_order`] establishes the canonical ascending date order
//! - [`loader`] runs one fetch through a [`CsvSource`](mj_client::CsvSource) and parses it

pub mod date_order;
pub mod loader;
pub mod table_parser;

// Re-export commonly used types
pub use date_order::{parse_date, sort_chronologically};
pub use loader::TableLoader;
pub use table_parser::{parse_document, parse_table, TableParser};

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{parse_document, parse_table, TableLoader, TableParser};
  pub use mj_client::{CsvSource, Transport};
  pub use mj_core::{Location, RawDocument, Row, Table, TableState};
}
