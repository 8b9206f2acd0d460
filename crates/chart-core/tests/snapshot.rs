// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Chart, ChartConfig, RenderOptions, Series, TickFormat};

fn render_doc() -> String {
    let mut chart = Chart::new().with_title("Total Gross by Year (2010 onward)");
    chart.add_series(Series::with_data(
        "gross",
        vec![(2010.0, 150.0e6), (2011.0, 90.0e6), (2012.0, 300.0e6), (2013.0, 200.0e6)],
    ));
    chart.autoscale_axes().expect("autoscale");
    chart.x_axis = chart.x_axis.with_tick_every(1.0);
    chart.x_axis.label = "Release Year".into();
    chart.y_axis.label = "Total Gross (USD)".into();
    chart.y_axis.tick_count = 3;
    chart.y_axis.format = TickFormat::Abbreviated;

    let config = ChartConfig {
        margin_top: 40,
        margin_right: 20,
        margin_bottom: 50,
        margin_left: 60,
        chart_width: 300,
        chart_height: 200,
    };
    let opts = RenderOptions { config, ..RenderOptions::default() };
    chart.to_svg_string(&opts).expect("render svg")
}

#[test]
fn golden_basic_chart() {
    let doc = render_doc();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &doc).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), doc.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(doc, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_doc(), render_doc());
}
