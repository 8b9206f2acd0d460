// File: crates/chart-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        if std::env::var_os("CARGO_FEATURE_RASTER").is_some() {
            println!("cargo:rustc-link-lib=advapi32");
        }
    }
}
