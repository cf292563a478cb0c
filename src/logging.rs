use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directives`. Calling this twice is a no-op.
pub fn init_logging(default_directives: &str) {
  let env_filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(default_directives))
    .unwrap_or_else(|_| EnvFilter::new("info"));

  let result = tracing_subscriber::registry()
    .with(env_filter)
    .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
    .try_init();

  if result.is_err() {
    tracing::debug!("Logging already initialized");
  }
}
