use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt;

/// Everything a [`capture_logs`] subscriber wrote, as plain text.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Lines logged at `level` ("ERROR", "WARN", ...).
    pub fn at_level(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .map(str::to_string)
            .collect()
    }
}

struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local `fmt` subscriber that records every event
/// (down to TRACE, no ANSI colours, no timestamps or targets).
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let logs = CapturedLogs::default();
    let buf = Arc::clone(&logs.buf);

    let subscriber = fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_writer(move || SharedWriter(Arc::clone(&buf)))
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs)
}
