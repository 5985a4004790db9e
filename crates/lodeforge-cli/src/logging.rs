use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::CliError;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LODEFORGE_LOG";

/// Install the global subscriber.
///
/// Without a log file, human readable output goes to stderr. With one, events
/// are appended to it as JSON lines.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = match log_file {
        Some(path) => json_file_layer(path)?.boxed(),
        None => tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// JSON lines with RFC 3339 UTC timestamps, appended to `path`.
fn json_file_layer<S>(path: &Path) -> Result<impl Layer<S> + Send + Sync + 'static, CliError>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let file: File = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file)))
}
