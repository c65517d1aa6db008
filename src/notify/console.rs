//! Console notification sink

use std::io::{self, Write};

use super::NotificationSink;
use crate::models::Notification;

/// Writes each notification as a single line to a writer
///
/// Write failures are logged and otherwise ignored.
pub struct ConsoleSink<W: Write> {
    out: W,
    date_format: String,
}

impl ConsoleSink<io::Stdout> {
    /// Sink that writes to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Use a custom strftime format for the date stamp
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for ConsoleSink<W> {
    fn deliver(&mut self, notification: &Notification) {
        let result = writeln!(
            self.out,
            "Notification [{}]: {}",
            notification.date.format(&self.date_format),
            notification.message
        )
        .and_then(|_| self.out.flush());

        if let Err(e) = result {
            tracing::warn!(id = notification.id, error = %e, "failed to print notification");
        }
    }
}
