//! File-backed tracing so diagnostics never write into the terminal UI.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber appending to `log_file`, honoring
/// `RUST_LOG`. Without `RUST_LOG` the process stays silent.
pub fn init(log_file: &str) -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
