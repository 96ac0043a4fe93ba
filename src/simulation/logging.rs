use std::io;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Logs to stdout at INFO, overridable through `RUST_LOG`. The subscriber is
/// installed thread-locally; logging resets when the returned guard drops.
pub fn init_std_out_logging_thread_local() -> DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let collector = tracing_subscriber::registry()
        .with(fmt::Layer::new().with_writer(io::stdout).with_filter(filter));
    tracing::subscriber::set_default(collector)
}
