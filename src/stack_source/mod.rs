//! Injectable access to the call stack.
//!
//! The stack walker never touches the runtime directly. It reads frames
//! through a [`StackSource`], which a [`StackProvider`] produces at the moment
//! a trail is requested. [`HostStacks`] captures the real thread stack via the
//! `backtrace` crate; with the `test-util` feature, [`FakeStack`] replays a
//! scripted stack so walker behaviour can be tested deterministically.

mod host;

#[cfg(any(test, feature = "test-util"))]
mod fake;

pub use host::{HostStack, HostStacks};

#[cfg(any(test, feature = "test-util"))]
pub use fake::FakeStack;

use crate::stack_frame::StackFrame;

/// Read access to one captured call stack.
pub trait StackSource {
    /// Return the frame at `depth`, where depth 0 is the function that
    /// requested the capture. `None` means the stack has no such frame.
    fn frame_at(&self, depth: usize) -> Option<StackFrame>;

    /// Resolve a program counter to its fully-qualified function name.
    fn function_name(&self, pc: usize) -> Option<String>;
}

impl<S: StackSource + ?Sized> StackSource for &S {
    fn frame_at(&self, depth: usize) -> Option<StackFrame> {
        (**self).frame_at(depth)
    }

    fn function_name(&self, pc: usize) -> Option<String> {
        (**self).function_name(pc)
    }
}

impl<S: StackSource + ?Sized> StackSource for Box<S> {
    fn frame_at(&self, depth: usize) -> Option<StackFrame> {
        (**self).frame_at(depth)
    }

    fn function_name(&self, pc: usize) -> Option<String> {
        (**self).function_name(pc)
    }
}

/// Captures the current call stack on demand.
pub trait StackProvider {
    /// The captured stack type.
    type Stack: StackSource;

    /// Capture the calling thread's stack.
    ///
    /// Depth 0 of the returned stack is the function that called `capture`.
    fn capture(&self) -> Self::Stack;
}
