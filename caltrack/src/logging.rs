use chrono::Local;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::error::{CaltrackError, Result};
use crate::log_buffer::{LogBuffer, LogEntry};
use crate::settings::Settings;

/// Keeps the non-blocking file writer alive; logs stop flushing once dropped
pub struct LoggingGuard {
    pub log_path: PathBuf,
    _worker: WorkerGuard,
}

/// Resolve the log directory: configured `log_dir`, else ~/.config/caltrack/logs
pub fn log_dir(settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = &settings.log_dir {
        return Ok(dir.clone());
    }

    dirs::config_dir()
        .map(|dir| dir.join("caltrack").join("logs"))
        .ok_or_else(|| CaltrackError::LogDirectory("could not find config directory".to_string()))
}

/// Build the filter: `RUST_LOG` if set, else the configured level
fn build_filter(settings: &Settings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|err| {
            CaltrackError::Configuration(format!(
                "invalid log_level {:?}: {}",
                settings.log_level, err
            ))
        }),
    }
}

/// Initialize tracing with a timestamped log file and an in-memory buffer
/// for the logs screen. Files are named caltrack-YYYY-MM-DD-HH-MM-SS.log.
pub fn init_logging(settings: &Settings, buffer: LogBuffer) -> Result<LoggingGuard> {
    let logs_dir = log_dir(settings)?;
    std::fs::create_dir_all(&logs_dir)?;

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("caltrack-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

    // No ANSI codes in the file, the terminal belongs to the UI
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_filter(settings)?)
        .with(file_layer)
        .with(LogBufferLayer::new(buffer))
        .try_init()
        .map_err(|err| CaltrackError::LoggingInit(err.to_string()))?;

    Ok(LoggingGuard {
        log_path,
        _worker: worker,
    })
}

/// A tracing layer that captures log entries to an in-memory buffer
pub struct LogBufferLayer {
    buffer: LogBuffer,
}

impl LogBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogBufferLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
        });
    }
}

/// Visitor to extract the message field from a tracing event
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_layer_captures_messages() {
        let buffer = LogBuffer::new(16);
        let subscriber = tracing_subscriber::registry().with(LogBufferLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("item {} ignored", 7);
        });

        let entries = buffer.get_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, tracing::Level::WARN);
        assert_eq!(entries[0].message, "item 7 ignored");
    }

    #[test]
    fn configured_log_dir_wins() {
        let settings = Settings {
            log_dir: Some(PathBuf::from("/tmp/caltrack-logs")),
            ..Default::default()
        };
        assert_eq!(log_dir(&settings).unwrap(), PathBuf::from("/tmp/caltrack-logs"));
    }
}
