//! Helpers shared by the integration tests.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run `f`, which must panic, and return its panic message.
pub fn panic_message<F, R>(f: F) -> String
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the closure to panic"),
        Err(payload) => payload_text(payload.as_ref()),
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_default()
}
