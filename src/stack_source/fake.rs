//! Scripted stacks for deterministic walker tests.

use super::{StackProvider, StackSource};
use crate::stack_frame::StackFrame;

const FAKE_PC_BASE: usize = 0x1000;
const FAKE_PC_STRIDE: usize = 0x10;

#[derive(Clone, Debug)]
struct ScriptedFrame {
    frame: StackFrame,
    function: Option<String>,
}

/// A call stack assembled frame by frame, innermost first.
///
/// Each pushed frame receives a distinct program counter. Frames pushed with
/// [`FakeStack::unresolved`] have no function name, which ends any walk that
/// reaches them.
///
/// # Examples
///
/// ```rust
/// use caller_trail::stack_source::{FakeStack, StackSource};
///
/// let stack = FakeStack::new()
///     .frame("pkg/widget/widget_test.go", 12, "example.com/pkg/widget.TestRender")
///     .frame("testing/testing.go", 1690, "testing.tRunner");
///
/// let top = stack.frame_at(0).unwrap();
/// assert_eq!(top.lineno, 12);
/// assert_eq!(
///     stack.function_name(top.pc).as_deref(),
///     Some("example.com/pkg/widget.TestRender")
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct FakeStack {
    frames: Vec<ScriptedFrame>,
}

impl FakeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame owned by `function`.
    pub fn frame(self, filename: &str, lineno: u32, function: &str) -> Self {
        self.push(filename, lineno, Some(function.to_string()))
    }

    /// Append a frame whose function cannot be resolved.
    pub fn unresolved(self, filename: &str, lineno: u32) -> Self {
        self.push(filename, lineno, None)
    }

    fn push(mut self, filename: &str, lineno: u32, function: Option<String>) -> Self {
        let pc = FAKE_PC_BASE + self.frames.len() * FAKE_PC_STRIDE;
        self.frames.push(ScriptedFrame {
            frame: StackFrame::new(pc, filename, lineno),
            function,
        });
        self
    }

    /// Number of scripted frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl StackSource for FakeStack {
    fn frame_at(&self, depth: usize) -> Option<StackFrame> {
        self.frames.get(depth).map(|f| f.frame.clone())
    }

    fn function_name(&self, pc: usize) -> Option<String> {
        self.frames
            .iter()
            .find(|f| f.frame.pc == pc)
            .and_then(|f| f.function.clone())
    }
}

/// Every capture replays the same script.
impl StackProvider for FakeStack {
    type Stack = FakeStack;

    fn capture(&self) -> FakeStack {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn frames_get_distinct_program_counters() {
        let stack = FakeStack::new()
            .frame("a/one.go", 1, "pkg.one")
            .frame("a/two.go", 2, "pkg.two");
        let first = stack.frame_at(0).expect("frame 0");
        let second = stack.frame_at(1).expect("frame 1");
        assert_ne!(first.pc, second.pc);
        assert_eq!(stack.function_name(second.pc).as_deref(), Some("pkg.two"));
    }

    #[rstest]
    fn unresolved_frame_has_no_name() {
        let stack = FakeStack::new().unresolved("a/one.go", 1);
        let frame = stack.frame_at(0).expect("frame 0");
        assert!(stack.function_name(frame.pc).is_none());
    }

    #[rstest]
    fn capture_replays_script() {
        let stack = FakeStack::new().frame("a/one.go", 1, "pkg.one");
        let captured = stack.capture();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured.frame_at(0), stack.frame_at(0));
    }
}
