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
use anyhow::Result;
use clap::Args;
use mj_core::{Table, TableState, DATE_COLUMN, INDICATOR_COLUMNS, NO_DATA_PLACEHOLDER};
use std::fmt::{self, Write};

#[derive(Args, Debug)]
pub struct SummaryArgs {
  /// Also list well-known indicators missing from the CSV
  #[arg(long)]
  missing: bool,
}

/// Print a short plain-text overview of the journal
pub async fn execute(args: SummaryArgs, config: Config) -> Result<()> {
  let location = config.location()?;
  let table = super::load_table(&config).await?;

  print!("{}", render(&location.to_string(), &table, args.missing)?);
  Ok(())
}

fn render(location: &str, table: &Table, show_missing: bool) -> Result<String, fmt::Error> {
  let mut out = String::new();
  writeln!(out, "Source:  {}", location)?;

  if let Some(message) = table.error() {
    writeln!(out, "Error:   {}", message)?;
    return Ok(out);
  }

  writeln!(out, "Columns: {}", table.headers().len())?;
  writeln!(out, "Rows:    {}", table.rows().len())?;

  if table.state() == TableState::Empty {
    writeln!(out, "{}", NO_DATA_PLACEHOLDER)?;
    return Ok(out);
  }

  let dates = table.column(DATE_COLUMN);
  if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
    writeln!(out, "Range:   {} .. {}", first, last)?;
  }

  if let Some(latest) = table.latest() {
    writeln!(out, "Latest:")?;
    for indicator in INDICATOR_COLUMNS.iter().filter(|i| table.headers().iter().any(|h| h == *i)) {
      writeln!(out, "  {:<18} {}", indicator, table.cell(latest, indicator))?;
    }
  }

  if show_missing {
    let missing = table.missing_indicators();
    if !missing.is_empty() {
      writeln!(out, "Missing: {}", missing.join(", "))?;
    }
  }

  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use mj_loaders::parse_table;

  #[test]
  fn test_render_populated() {
    let table = parse_table(Some(
      "date,GOLD,BITCOIN,note\n2024-01-02,2058.1,,x\n2024-01-01,2063.7,42000,y",
    ));
    let text = render("data/etf_prices_log.csv", &table, false).unwrap();

    assert!(text.contains("Source:  data/etf_prices_log.csv"));
    assert!(text.contains("Rows:    2"));
    assert!(text.contains("Range:   2024-01-01 .. 2024-01-02"));
    assert!(text.contains("GOLD"));
    assert!(text.contains("2058.1"));
    assert!(text.contains("BITCOIN"));
    assert!(!text.contains("42000"));
    assert!(!text.contains("—"));
    assert!(!text.contains("note"));
    assert!(!text.contains("Missing"));
  }

  #[test]
  fn test_render_headers_only_shows_placeholder() {
    let table = parse_table(Some("date,GOLD"));
    let text = render("log.csv", &table, true).unwrap();

    assert!(text.contains(NO_DATA_PLACEHOLDER));
    assert!(!text.contains("Latest"));
  }

  #[test]
  fn test_render_error() {
    let table = Table::failed("Fetch failed: 404");
    let text = render("https://example.com/log.csv", &table, true).unwrap();

    assert!(text.contains("Error:   Fetch failed: 404"));
    assert!(!text.contains("Rows"));
  }

  #[test]
  fn test_render_missing_indicators() {
    let table = parse_table(Some("date,GOLD\n2024-01-01,2063.7"));
    let text = render("log.csv", &table, true).unwrap();

    assert!(text.contains("Missing: EURO/USD"));
    assert!(!text.contains("Missing: GOLD"));
  }
}
