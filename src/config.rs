use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::render::{Layout, RenderOptions};

/// Config path used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "annum.toml";

/// Top-level annum configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnnumConfig {
    /// Grid appearance.
    #[serde(default)]
    pub grid: GridToml,

    /// Frame rendering settings.
    #[serde(default)]
    pub render: RenderToml,

    /// Refresh cadences.
    #[serde(default)]
    pub refresh: RefreshToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    /// Markers per grid row.
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Glyph for days already passed.
    #[serde(default = "default_elapsed")]
    pub elapsed: char,
    /// Glyph for today.
    #[serde(default = "default_current")]
    pub current: char,
    /// Glyph for days still to come.
    #[serde(default = "default_upcoming")]
    pub upcoming: char,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            elapsed: default_elapsed(),
            current: default_current(),
            upcoming: default_upcoming(),
        }
    }
}

fn default_columns() -> usize {
    32
}
fn default_elapsed() -> char {
    '●'
}
fn default_current() -> char {
    '◉'
}
fn default_upcoming() -> char {
    '○'
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    /// ANSI colour in the frame.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Frame layout: "full" or "compact".
    #[serde(default = "default_layout")]
    pub layout: String,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            color: true,
            layout: default_layout(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_layout() -> String {
    "full".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshToml {
    /// Seconds between clock refreshes.
    #[serde(default = "default_period_secs")]
    pub clock_secs: u64,
    /// Seconds between midnight-rollover checks.
    #[serde(default = "default_period_secs")]
    pub rollover_secs: u64,
}

impl Default for RefreshToml {
    fn default() -> Self {
        Self {
            clock_secs: default_period_secs(),
            rollover_secs: default_period_secs(),
        }
    }
}

fn default_period_secs() -> u64 {
    60
}

/// Parses a layout name string into the corresponding enum variant.
pub fn parse_layout(s: &str) -> Result<Layout> {
    match s.to_lowercase().as_str() {
        "full" => Ok(Layout::Full),
        "compact" => Ok(Layout::Compact),
        other => bail!("unknown layout: {other:?} (expected \"full\" or \"compact\")"),
    }
}

/// Resolves the config path from an optional CLI flag.
///
/// Returns the path plus whether it was explicitly requested.
pub fn resolve_path(cli_path: Option<&Path>) -> (&Path, bool) {
    match cli_path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    }
}

/// Loads configuration from `path`.
///
/// A missing file at the default path yields the built-in defaults; an
/// explicitly requested path must exist.
pub fn load(path: &Path, explicit: bool) -> Result<AnnumConfig> {
    if !explicit && !path.exists() {
        return Ok(AnnumConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AnnumConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    if config.refresh.clock_secs == 0 || config.refresh.rollover_secs == 0 {
        bail!("refresh periods must be at least 1 second");
    }
    Ok(config)
}

impl AnnumConfig {
    /// Builds render options, letting a CLI `--compact` flag win over the
    /// configured layout.
    pub fn render_options(&self, compact: bool) -> Result<RenderOptions> {
        let layout = if compact {
            Layout::Compact
        } else {
            parse_layout(&self.render.layout)?
        };
        Ok(RenderOptions {
            columns: self.grid.columns.max(1),
            glyph_elapsed: self.grid.elapsed,
            glyph_current: self.grid.current,
            glyph_upcoming: self.grid.upcoming,
            color: self.render.color,
            layout,
        })
    }
}
