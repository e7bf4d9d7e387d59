//! Tracing subscriber setup for serve mode.
//!
//! Defaults to `info`; `RUST_LOG` overrides per the usual `EnvFilter`
//! directive syntax.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
