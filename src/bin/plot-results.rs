use anyhow::anyhow;
use ofdm_viewer::comparison::load_comparison;
use ofdm_viewer::config::ComparisonConfig;
use ofdm_viewer::plot::plot_comparison;

// cargo run -r --bin plot-results
fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let comparison = load_comparison(&ComparisonConfig::default())?;
    log::info!("comparing {} samples", comparison.result.len());
    plot_comparison(comparison).map_err(|e| anyhow!("chart window failed: {}", e))
}
