use anyhow::anyhow;
use ofdm_viewer::config::SineConfig;
use ofdm_viewer::plot::plot_sines;
use ofdm_viewer::sine::sine_pair;

// cargo run -r --bin plot-sine
fn main() -> anyhow::Result<()> {
    env_logger::init();
    plot_sines(sine_pair(&SineConfig::default())).map_err(|e| anyhow!("chart window failed: {}", e))
}
