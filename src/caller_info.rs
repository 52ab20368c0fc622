//! Caller-trail construction from a captured call stack.
//!
//! [`CallerInfo`] walks a [`StackSource`] from depth 0 outward and yields one
//! `file:line` entry per recorded frame. The walk ends at the first of:
//!
//! - a depth the source cannot provide;
//! - a frame whose file is the synthetic marker (`<autogenerated>`);
//! - a frame whose function name cannot be resolved;
//! - the runner's dispatch function, which is not recorded;
//! - a test, benchmark, or example entry point, which is recorded first.
//!
//! Frames from helper directories are skipped without ending the walk. The
//! walker never fails; introspection problems only shorten the trail.

use std::iter::FusedIterator;

use log::trace;

use crate::config::TrailConfig;
use crate::frame_filter::{is_boundary, short_function_name, should_record};
use crate::stack_source::StackSource;

/// Lazy iterator over the `file:line` entries of a caller trail.
///
/// The iterator is fused and cannot be restarted; walk a fresh capture to
/// build another trail.
///
/// # Examples
///
/// ```rust
/// use caller_trail::{CallerInfo, TrailConfig};
/// use caller_trail::stack_source::FakeStack;
///
/// let stack = FakeStack::new()
///     .frame("pkg/widget/helpers_test.go", 30, "example.com/pkg/widget.checkRender")
///     .frame("pkg/widget/widget_test.go", 12, "example.com/pkg/widget.TestRender")
///     .frame("go/src/testing/testing.go", 1690, "testing.tRunner");
///
/// let config = TrailConfig::default();
/// let trail: Vec<String> = CallerInfo::new(stack, &config).collect();
/// assert_eq!(trail, ["helpers_test.go:30", "widget_test.go:12"]);
/// ```
#[derive(Debug)]
pub struct CallerInfo<'a, S> {
    stack: S,
    config: &'a TrailConfig,
    depth: usize,
    done: bool,
}

impl<'a, S: StackSource> CallerInfo<'a, S> {
    /// Start a walk over `stack` using the rules in `config`.
    pub fn new(stack: S, config: &'a TrailConfig) -> Self {
        Self {
            stack,
            config,
            depth: 0,
            done: false,
        }
    }

    /// Depth of the next frame the walk would inspect.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn stop(&mut self, reason: &str) {
        trace!("CallerInfo: stopped at depth {}: {}", self.depth, reason);
        self.done = true;
    }

    /// Inspect the frame at the current depth.
    ///
    /// Returns `None` when the walk has ended, `Some(None)` for a frame that
    /// is skipped, and `Some(Some(entry))` for a recorded frame.
    fn step(&mut self) -> Option<Option<String>> {
        let Some(frame) = self.stack.frame_at(self.depth) else {
            self.stop("end of stack");
            return None;
        };
        if frame.filename == self.config.synthetic_file() {
            self.stop("synthetic frame");
            return None;
        }
        let Some(name) = self.stack.function_name(frame.pc) else {
            self.stop("unresolved function");
            return None;
        };
        if self.config.is_dispatch_function(&name) {
            self.stop("runner dispatch function");
            return None;
        }

        let entry = should_record(
            &frame.filename,
            self.config.helper_dirs(),
            self.config.always_included_file(),
        )
        .then(|| frame.location());

        let short = short_function_name(&name, self.config.qualifier_separator());
        if is_boundary(short, self.config.boundary_prefixes()) {
            self.stop("test boundary");
        } else {
            self.depth += 1;
        }
        Some(entry)
    }
}

impl<S: StackSource> Iterator for CallerInfo<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.done {
            if let Some(entry) = self.step()? {
                return Some(entry);
            }
        }
        None
    }
}

impl<S: StackSource> FusedIterator for CallerInfo<'_, S> {}

/// Drop the first `skip` entries of a trail and join the rest with newlines.
///
/// Trails shorter than `skip` produce an empty string.
pub fn join_trail<I>(entries: I, skip: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    entries.into_iter().skip(skip).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
#[path = "caller_info_tests.rs"]
mod tests;
