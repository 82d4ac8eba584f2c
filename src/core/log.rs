//! Tracing subscriber setup for the binary

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Level for this crate's own spans and events.
fn app_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

/// `RUST_LOG` wins over the verbosity flag for dependency targets.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(app_level(verbose).into()))
}

pub fn init_logging(verbose: bool) {
    let app_filter = Targets::new().with_target(APP_TARGET, app_level(verbose));

    // The converter window owns stdout
    let stderr = console::Term::stderr();
    let layer = fmt::layer()
        .pretty()
        .without_time()
        .with_ansi(stderr.is_term())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(app_filter)
        .with(env_filter(verbose))
        .init();
}
