//! Writer implementations

// Standard library
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Arc;

// External dependencies
use parking_lot::Mutex;

// Internal crates
use crate::config::WriterConfig;
use crate::core::LogResult;

/// Boxed output sink
pub type Sink = Box<dyn Write + Send>;

/// Create a writer from configuration
pub fn make_writer(config: &WriterConfig) -> LogResult<Sink> {
    let writer: Sink = match config {
        WriterConfig::Stdout => Box::new(io::stdout()),
        WriterConfig::Stderr => Box::new(io::stderr()),
        WriterConfig::File { path, append } => {
            let mut options = OpenOptions::new();
            options.create(true);
            if *append {
                options.append(true);
            } else {
                options.write(true).truncate(true);
            }
            Box::new(options.open(path)?)
        }
    };

    Ok(writer)
}

/// In-memory sink
///
/// Clones share the same buffer, so one handle can be given to a logger
/// while another reads back what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Take the buffered output, leaving the buffer empty
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buf.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
