use tracing::{Subscriber, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, filter::ParseError, layer::SubscriberExt};

#[cfg(feature = "file-log")]
pub mod file;

/// Subscriber filtered by `level_regex`, an `EnvFilter` directive string such as
/// `info,zonesnap_core=debug`. Falls back to `debug` and hands back the parse error.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + use<>, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .parse_lossy("")
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Install the subscriber for `log_level` as the global default.
pub fn setup(log_level: &str) {
    let (subscriber, parse_err) = parse_log_level(log_level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not set up logging: {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Error parsing log_level config: {err}");
    }
}
