//! Assertion reporters that annotate failures with a caller trail.
//!
//! A [`TestContext`] stands in for the running test. It owns the stack
//! provider used to capture the caller trail, the walker configuration, and
//! the [`FailureSink`] that ends the test. The reporters compare values and,
//! on mismatch, fail with a message of the form
//!
//! ```text
//! \n<file:line>\n<file:line>\t<detail>
//! ```
//!
//! where the trail starts at the code that called the reporter.
//!
//! # Examples
//!
//! ```rust
//! use caller_trail::TestContext;
//!
//! let ctx = TestContext::new();
//! ctx.assert_equal("parsed", "parsed");
//! ctx.assert_equal_int(3, 1 + 2);
//! ```

use std::fmt;

use log::error;

use crate::caller_info::{join_trail, CallerInfo};
use crate::config::TrailConfig;
use crate::stack_source::{HostStacks, StackProvider};

/// Ends the current test with a message.
pub trait FailureSink {
    /// Report `message` as the test's failure. Never returns.
    fn fail(&self, message: &str) -> !;
}

/// Fails the test by panicking, which libtest reports as a test failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicOnFailure;

impl FailureSink for PanicOnFailure {
    fn fail(&self, message: &str) -> ! {
        error!("assertion failed:{message}");
        panic!("{message}");
    }
}

/// Explicit handle for the test being executed.
#[derive(Clone, Debug)]
pub struct TestContext<P = HostStacks, F = PanicOnFailure> {
    provider: P,
    sink: F,
    config: TrailConfig,
}

impl TestContext {
    /// Create a context that captures the real stack, applies
    /// [`TrailConfig::rust_harness`], and panics on failure.
    pub fn new() -> Self {
        Self::with_parts(HostStacks, PanicOnFailure, TrailConfig::rust_harness())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: StackProvider, F: FailureSink> TestContext<P, F> {
    /// Assemble a context from its parts.
    pub fn with_parts(provider: P, sink: F, config: TrailConfig) -> Self {
        Self {
            provider,
            sink,
            config,
        }
    }

    /// Replace the walker configuration.
    pub fn with_config(mut self, config: TrailConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Capture the current stack and start walking it.
    ///
    /// The first entry is this function's own frame and the second is its
    /// caller's, which is why reporters drop [`TrailConfig::skip`] entries.
    #[inline(never)]
    pub fn caller_info(&self) -> CallerInfo<'_, P::Stack> {
        CallerInfo::new(self.provider.capture(), &self.config)
    }

    /// Return the joined trail leading to the code that called this method.
    #[inline(never)]
    pub fn caller_trail(&self) -> String {
        join_trail(self.caller_info(), self.config.skip())
    }

    /// Fail the test unless `expect` equals `actual`.
    #[inline(never)]
    pub fn assert_equal(&self, expect: &str, actual: &str) {
        if expect != actual {
            let trail = join_trail(self.caller_info(), self.config.skip());
            self.fail_with_trail(
                &trail,
                format_args!("Expect '{expect}' but actual is '{actual}'"),
            );
        }
    }

    /// Fail the test unless the integers `expect` and `actual` are equal.
    #[inline(never)]
    pub fn assert_equal_int(&self, expect: i64, actual: i64) {
        if expect != actual {
            let trail = join_trail(self.caller_info(), self.config.skip());
            self.fail_with_trail(
                &trail,
                format_args!("Expect '{expect}' but actual is '{actual}'"),
            );
        }
    }

    /// Fail the test unconditionally with a caller-supplied message.
    ///
    /// Prefer the [`assert_fail!`](crate::assert_fail) macro, which accepts
    /// `format!`-style arguments.
    #[inline(never)]
    pub fn assert_fail(&self, detail: fmt::Arguments<'_>) -> ! {
        let trail = join_trail(self.caller_info(), self.config.skip());
        self.fail_with_trail(&trail, detail)
    }

    fn fail_with_trail(&self, trail: &str, detail: fmt::Arguments<'_>) -> ! {
        self.sink.fail(&format_failure(trail, detail))
    }
}

/// Format a failure message: a leading newline, the trail, a tab, and the
/// detail.
pub fn format_failure(trail: &str, detail: fmt::Arguments<'_>) -> String {
    format!("\n{trail}\t{detail}")
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
