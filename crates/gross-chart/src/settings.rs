// File: crates/gross-chart/src/settings.rs
// Summary: Command-line settings and chart configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::ChartConfig;
use clap::{Parser, ValueEnum};
use movie_data::Variant;

/// Render total movie gross by release year as a line chart
#[derive(Parser, Debug, Clone)]
#[command(name = "gross-chart", version)]
pub struct Settings {
    /// Movie CSV file (needs imdb_score, title_year, director_name, gross columns)
    #[arg(default_value = "movies.csv")]
    pub input: PathBuf,

    /// Which chart variant(s) to render
    #[arg(long, value_enum, default_value_t = VariantArg::Both)]
    pub variant: VariantArg,

    /// Directory the charts are written to
    #[arg(long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Output image format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Color theme
    #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
    pub theme: String,

    /// JSON file with margin_top/right/bottom/left, chart_width, chart_height
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the aggregated series as JSON on stdout
    #[arg(long)]
    pub print_data: bool,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, env = "GROSS_CHART_LOG", default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Every year with a known release year
    AllYears,
    /// Only releases from 2010 onward
    #[value(name = "since-2010")]
    Since2010,
    /// Render both charts
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

impl Settings {
    pub fn variants(&self) -> Vec<Variant> {
        match self.variant {
            VariantArg::AllYears => vec![Variant::AllYears],
            VariantArg::Since2010 => vec![Variant::Since2010],
            VariantArg::Both => Variant::ALL.to_vec(),
        }
    }

    /// Defaults, overridden by the `--config` file when given.
    pub fn chart_config(&self) -> Result<ChartConfig> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => ChartConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// `<out_dir>/gross_by_year_<variant>.<ext>`
    pub fn output_path(&self, variant: Variant) -> PathBuf {
        let stem = variant.slug().replace('-', "_");
        self.out_dir.join(format!("gross_by_year_{}.{}", stem, self.format.extension()))
    }
}

pub fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
