//! Caller trails for test assertion failures.
//!
//! The crate walks the active call stack to build a list of `file:line`
//! entries leading to a failed assertion, and exposes a few thin reporters
//! that fail the current test with that trail prepended to the message.
//!
//! - [`caller_info`] walks a captured stack and yields the trail.
//! - [`frame_filter`] holds the classification rules the walk applies.
//! - [`stack_source`] abstracts stack capture so the walk can be tested.
//! - [`reporter`] provides [`TestContext`] and the assertion reporters.

pub mod assert_macros;
pub mod caller_info;
pub mod config;
pub mod frame_filter;
pub mod reporter;
pub mod stack_frame;
pub mod stack_source;

#[cfg(test)]
mod test_utils;

pub use caller_info::{join_trail, CallerInfo};
pub use config::{ConfigError, TrailConfig, TrailConfigBuilder};
pub use reporter::{FailureSink, PanicOnFailure, TestContext};
pub use stack_frame::StackFrame;
pub use stack_source::{HostStack, HostStacks, StackProvider, StackSource};

#[cfg(any(test, feature = "test-util"))]
pub use stack_source::FakeStack;
