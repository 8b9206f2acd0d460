// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing an SVG.

use chart_core::{Chart, ChartConfig, ChartError, RenderOptions, Series, TickFormat};

fn gross_chart() -> Chart {
    let mut chart = Chart::new().with_title("Total Gross by Year");
    chart.add_series(Series::with_data(
        "gross",
        vec![(2007.0, 645_934_455.0), (2009.0, 760_505_848.0), (2012.0, 521_189_321.0), (2015.0, 200_074_175.0)],
    ));
    chart.autoscale_axes().expect("autoscale");
    chart
}

#[test]
fn render_smoke_svg() {
    let chart = gross_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");

    chart.render_to_svg(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");

    // Also verify in-memory API works
    let doc = chart.to_svg_string(&opts).expect("render string");
    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"400\""));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert!(doc.contains("<g transform=\"translate(70,50)\">"));
    assert!(doc.contains("stroke=\"#4682b4\" stroke-width=\"2\""));
    assert!(doc.contains(">Total Gross by Year</text>"));
    assert!(doc.contains("transform=\"rotate(-90)\""));
    // integer year ticks, grouped gross ticks
    assert!(doc.contains(">2009</text>"));
    assert!(doc.contains(">700,000,000</text>"));
}

#[test]
fn abbreviated_axis_changes_tick_text() {
    let mut chart = gross_chart();
    chart.y_axis.format = TickFormat::Abbreviated;
    let doc = chart.to_svg_string(&RenderOptions::default()).expect("render");
    assert!(doc.contains(">$700M</text>"));
    assert!(!doc.contains(">700,000,000</text>"));
}

#[test]
fn custom_config_resizes_document() {
    let config = ChartConfig { chart_width: 400, chart_height: 200, ..ChartConfig::default() };
    let opts = RenderOptions { config, ..RenderOptions::default() };
    let doc = gross_chart().to_svg_string(&opts).expect("render");
    assert!(doc.contains("width=\"500\" height=\"310\""));
}

#[test]
fn empty_chart_does_not_render() {
    let out = std::path::PathBuf::from("target/test_out/empty.svg");
    let err = Chart::new().render_to_svg(&RenderOptions::default(), &out).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries));
}
