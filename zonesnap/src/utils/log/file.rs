use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "zonesnap.log";

/// Adds a plain-text layer writing to `$XDG_CACHE_HOME/zonesnap/zonesnap.log`. Without a usable
/// cache directory the subscriber is returned as it was.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = log_dir().map(|dir| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
    });

    subscriber.with(layer)
}

fn log_dir() -> Option<PathBuf> {
    let dir = BaseDirectories::with_prefix("zonesnap").ok()?.get_cache_home();
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(err) => {
            eprintln!("Couldn't create log directory {}: {err}", dir.display());
            None
        }
    }
}
