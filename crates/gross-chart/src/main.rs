// File: crates/gross-chart/src/main.rs
// Summary: Loads the movie CSV, sums gross per year and renders one chart per variant.

mod input;
mod logging;
mod presets;
mod settings;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use clap::Parser;
use movie_data::{aggregate, load_csv, Aggregation, Variant};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use presets::Preset;
use settings::{OutputFormat, Settings};

fn main() -> Result<()> {
    let settings = Settings::parse();
    logging::setup_logging(&settings.log_level)?;
    run(&settings)
}

/// Render every selected variant. A variant that fails is logged and the
/// rest still render; the run as a whole then fails.
fn run(settings: &Settings) -> Result<()> {
    let opts = RenderOptions {
        config: settings.chart_config()?,
        theme: chart_core::theme::find(&settings.theme),
        draw_labels: true,
    };

    let (path, used_alt) = input::resolve_path(&settings.input)?;
    info!("Using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let loaded = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if loaded.skipped > 0 {
        warn!(skipped = loaded.skipped, "some rows could not be read");
    }

    let mut data = Vec::new();
    let mut failed = Vec::new();
    for variant in settings.variants() {
        let agg = aggregate(&loaded.records, variant.filter());
        info!(
            variant = variant.slug(),
            kept = agg.kept,
            excluded = agg.excluded,
            years = agg.years.len(),
            total = agg.grand_total(),
            "aggregated gross by year"
        );
        if let Err(e) = render_variant(settings, &opts, variant, &agg) {
            error!(variant = variant.slug(), "{e:#}");
            failed.push(variant.slug());
        }
        data.push((variant, agg));
    }

    if settings.print_data {
        println!("{}", serde_json::to_string_pretty(&data_document(&data)?)?);
    }

    if !failed.is_empty() {
        anyhow::bail!("could not render: {}", failed.join(", "));
    }
    Ok(())
}

/// One JSON object keyed by variant slug, so `--variant both` stays a single document.
fn data_document(data: &[(Variant, Aggregation)]) -> Result<Value> {
    let mut doc = Map::new();
    for (variant, agg) in data {
        doc.insert(variant.slug().to_string(), serde_json::to_value(&agg.years)?);
    }
    Ok(Value::Object(doc))
}

fn render_variant(settings: &Settings, opts: &RenderOptions, variant: Variant, agg: &Aggregation) -> Result<()> {
    let chart = Preset::for_variant(variant)
        .build_chart(agg.points())
        .context("no qualifying rows to plot")?;

    let out = settings.output_path(variant);
    match settings.format {
        OutputFormat::Svg => chart.render_to_svg(opts, &out)?,
        OutputFormat::Png => render_png(&chart, opts, &out)?,
    }
    info!("Wrote {}", out.display());
    Ok(())
}

#[cfg(feature = "png")]
fn render_png(chart: &Chart, opts: &RenderOptions, out: &Path) -> Result<()> {
    let scene = chart.build_scene(opts)?;
    chart_render_skia::SkiaRenderer::new().render_png(&scene, out)
}

#[cfg(not(feature = "png"))]
fn render_png(_chart: &Chart, _opts: &RenderOptions, out: &Path) -> Result<()> {
    anyhow::bail!("cannot write {}: PNG output requires --features png", out.display())
}
