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

use anyhow::{Context, Result};
use mj_core::{Config as CoreConfig, Location};

/// Runtime configuration: the environment, with command-line overrides applied
#[derive(Debug, Clone)]
pub struct Config {
  pub core: CoreConfig,
}

impl Config {
  pub fn from_env(url: Option<String>, path: Option<String>) -> Result<Self> {
    let core = CoreConfig::from_env().context("Failed to load configuration from environment")?;
    Ok(Self::with_overrides(core, url, path))
  }

  /// A location given on the command line replaces whatever the environment set.
  pub fn with_overrides(mut core: CoreConfig, url: Option<String>, path: Option<String>) -> Self {
    if let Some(url) = url {
      core.source.url = Some(url);
      core.source.local_path = None;
    }
    if let Some(path) = path {
      core.source.local_path = Some(path);
      core.source.url = None;
    }
    Self { core }
  }

  pub fn location(&self) -> Result<Location> {
    self.core.location().context("Invalid CSV location")
  }
}
