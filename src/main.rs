use anyhow::Result;
use kelvinbatch::{Config, RowConverter};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) one pass over the fixed input file ───────────────────────
    let config = Config::default();
    let converter = RowConverter::from_config(&config);

    info!("===============================================");
    info!("Starting Kelvin to Fahrenheit batch conversion.");
    match converter.process_rows(&config.input, &config.output) {
        Some(report) if report.rows_dropped() == 0 => {
            info!("Processing complete! Check for new file.");
        }
        Some(report) => {
            warn!(
                "Processing complete with {} dropped rows. Check for new file.",
                report.rows_dropped()
            );
        }
        // failure already logged by the pass
        None => {}
    }
    info!("===============================================");

    Ok(())
}
