//! A failure sink that keeps every reported message for later inspection.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::reporter::FailureSink;

/// Panic payload used by [`RecordingSink`] once it has stored a message.
pub const RECORDED_FAILURE: &str = "recorded failure";

/// Sink that stores each failure message, then unwinds with
/// [`RECORDED_FAILURE`].
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl FailureSink for RecordingSink {
    fn fail(&self, message: &str) -> ! {
        self.messages.lock().push(message.to_string());
        panic!("{RECORDED_FAILURE}");
    }
}
