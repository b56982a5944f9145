//! Compile-time build information, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line banner for the simulator.
pub fn banner() -> String {
    format!("delve {} ({}, {})", env!("CARGO_PKG_VERSION"), BUILD_COMMIT, BUILD_DATE)
}
