//! In-memory capture of formatted log output.

use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::subscriber::DefaultGuard;

/// Log lines written by a subscriber installed with [`CapturedLogs::install`].
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Records every event at `INFO` or above on the current thread until the
    /// returned guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Lines of events emitted with the given `target`.
    pub fn with_target(&self, target: &str) -> Vec<String> {
        let needle = format!(" {target}: ");
        self.contents()
            .lines()
            .filter(|line| line.contains(&needle))
            .map(Into::into)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_events_by_target() {
        // Arrange
        let (logs, _guard) = CapturedLogs::install();

        // Act
        tracing::info!(target: "warbuoy::demo", answer = 42, "hello");
        tracing::debug!(target: "warbuoy::demo", "too verbose");
        tracing::info!(target: "warbuoy::other", "elsewhere");

        // Assert
        let lines = logs.with_target("warbuoy::demo");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("hello answer=42"), "{}", lines[0]);
    }
}
