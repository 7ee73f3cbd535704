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

use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use mj_core::Table;

#[derive(Args, Debug)]
pub struct ShowArgs {
  /// Pretty-print the JSON
  #[arg(long)]
  pretty: bool,

  /// Exit non-zero when the table carries an error
  #[arg(long)]
  fail_on_error: bool,
}

/// Print `{headers, rows, error}` as JSON on stdout
pub async fn execute(args: ShowArgs, config: Config) -> Result<()> {
  let table = super::load_table(&config).await?;

  println!("{}", render(&table, args.pretty)?);

  if args.fail_on_error {
    if let Some(message) = table.error() {
      bail!("{}", message);
    }
  }
  Ok(())
}

fn render(table: &Table, pretty: bool) -> Result<String> {
  let text =
    if pretty { serde_json::to_string_pretty(table)? } else { serde_json::to_string(table)? };
  Ok(text)
}

#[cfg(test)]
mod tests {
  use super::*;
  use mj_loaders::parse_table;

  #[test]
  fn test_render_compact() {
    let table = parse_table(Some("date,GOLD\n2024-01-02,2058.1\n2024-01-01,2063.7"));
    assert_eq!(
      render(&table, false).unwrap(),
      r#"{"headers":["date","GOLD"],"rows":[{"date":"2024-01-01","GOLD":"2063.7"},{"date":"2024-01-02","GOLD":"2058.1"}],"error":null}"#
    );
  }

  #[test]
  fn test_render_error() {
    let table = Table::failed("Fetch failed: 404");
    assert_eq!(
      render(&table, false).unwrap(),
      r#"{"headers":[],"rows":[],"error":"Fetch failed: 404"}"#
    );
  }
}
