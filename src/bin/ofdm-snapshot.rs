use anyhow::anyhow;
use ofdm_viewer::config::SnapshotConfig;
use ofdm_viewer::plot::plot_snapshot;
use ofdm_viewer::samples::read_samples;
use ofdm_viewer::snapshot::{compute_snapshot, decode_bytes};

// cargo run -r --bin ofdm-snapshot
fn main() -> anyhow::Result<()> {
    // Log to stderr, `RUST_LOG=debug` for window bounds and harmonic values.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SnapshotConfig::default();
    let emitted = read_samples(&config.emitted_path)?;
    let received = read_samples(&config.received_path)?;

    log::info!("emitted bytes: {:02x?}", decode_bytes(&emitted, 0, &config));
    log::info!(
        "received bytes: {:02x?}",
        decode_bytes(&received, config.received_offset, &config)
    );

    let snapshot = compute_snapshot(&emitted, &received, &config)?;
    plot_snapshot(snapshot).map_err(|e| anyhow!("chart window failed: {}", e))
}
