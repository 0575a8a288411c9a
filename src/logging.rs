//! Tracing/logging initialization.
//!
//! Every store and persistence event is emitted through `tracing` macros. The
//! binary installs a global subscriber writing one timestamped, levelled line
//! per event to the configured [`LogSink`]. Tests build a subscriber over a
//! [`MemorySink`] instead and scope it with `tracing::subscriber::with_default`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{InventoryConfig, LogSink, DEFAULT_LOG_LEVEL};
use crate::types::InventoryError;

/// Build a plain-text subscriber writing to `writer`.
///
/// `level` is an `EnvFilter` directive; an unparseable directive falls back
/// to `info`.
pub fn subscriber<W>(level: &str, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Install the process-wide subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Fails only when
/// the log file cannot be opened.
pub fn init(config: &InventoryConfig) -> Result<(), InventoryError> {
    match &config.log_sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| InventoryError::io(path, &e))?;
            let _ = tracing::subscriber::set_global_default(subscriber(
                &config.log_level,
                Mutex::new(file),
            ));
        }
        LogSink::Stderr => {
            let _ = tracing::subscriber::set_global_default(subscriber(
                &config.log_level,
                io::stderr,
            ));
        }
    }
    Ok(())
}

/// In-memory log sink
///
/// Clones share the same buffer, so one handle can be given to a subscriber
/// while another reads back what was logged.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything logged so far
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Logged lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Run `f` with a subscriber logging into this sink at `info`
    pub fn capture<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        tracing::subscriber::with_default(subscriber(DEFAULT_LOG_LEVEL, self.clone()), f)
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemorySink {
    type Writer = MemorySink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
