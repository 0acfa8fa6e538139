use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

/// `strftime` pattern used for every activity entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of wall-clock time for activity entries.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Most-recent-first trail of catalog operations.
///
/// Lives only in memory; nothing here is ever written to disk.
#[derive(Clone)]
pub struct ActivityLog {
    text: String,
    clock: Clock,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| Local::now().naive_local()))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            text: String::new(),
            clock,
        }
    }

    /// Prepends `<timestamp>: <message>\n` to the trail.
    pub fn record(&mut self, message: impl AsRef<str>) {
        let stamp = (self.clock)().format(TIMESTAMP_FORMAT);
        let entry = format!("{stamp}: {}\n", message.as_ref());
        self.text.insert_str(0, &entry);
    }

    pub fn snapshot(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityLog")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}
