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

//! # mj-client
//!
//! The CSV source adapter of the Market Journal pipeline.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mj_client::{CsvSource, Transport};
//! use mj_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let transport = Transport::new(&config)?;
//!
//!     let doc = transport.fetch_csv(&config.location()?).await;
//!     match doc.error {
//!         Some(message) => eprintln!("Error: {}", message),
//!         None => println!("{} bytes", doc.body.len()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fetching never returns `Err`. Transport failures carry the underlying
//! message, non-success statuses read `Fetch failed: <status>`, and anything
//! without a message becomes `Unknown error`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod source;
pub mod transport;

pub use mj_core::{Config, Error, Location, RawDocument, Result};
pub use source::CsvSource;
pub use transport::Transport;
