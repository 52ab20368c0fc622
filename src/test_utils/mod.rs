//! Test-only helpers shared across crate unit tests.
//!
//! This module is only compiled for unit tests and provides small utilities
//! used by multiple test modules to keep individual test files focused.

pub mod recording_sink;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run `f`, which must panic, and return its panic message.
pub fn panic_message<F, R>(f: F) -> String
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the closure to panic"),
        Err(payload) => payload_message(payload.as_ref()),
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        String::from("<non-string panic payload>")
    }
}
