//! Stack capture backed by the `backtrace` crate.

use backtrace::{Backtrace, BacktraceFrame};
use log::trace;

use super::{StackProvider, StackSource};
use crate::stack_frame::{StackFrame, UNKNOWN_FILE};

/// Provider that captures the calling thread's real stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostStacks;

impl StackProvider for HostStacks {
    type Stack = HostStack;

    #[inline(never)]
    fn capture(&self) -> HostStack {
        let this: fn(&Self) -> HostStack = <Self as StackProvider>::capture;
        HostStack::from_backtrace(&Backtrace::new(), this as usize)
    }
}

#[derive(Clone, Debug)]
struct HostFrame {
    pc: usize,
    filename: Option<String>,
    lineno: Option<u32>,
    function: Option<String>,
}

/// A resolved snapshot of one thread's stack.
///
/// Inlined functions are expanded into their own logical frames. They share
/// the instruction pointer of the physical frame that contains them, so
/// [`StackSource::function_name`] reports the innermost function for such a
/// program counter.
#[derive(Clone, Debug, Default)]
pub struct HostStack {
    frames: Vec<HostFrame>,
}

impl HostStack {
    /// Build a snapshot from `backtrace`, dropping every frame up to and
    /// including the one whose symbol starts at `marker`.
    fn from_backtrace(backtrace: &Backtrace, marker: usize) -> Self {
        let physical = backtrace.frames();
        let start = capture_frame_index(physical, marker)
            .map(|idx| idx + 1)
            .unwrap_or_else(|| {
                trace!("HostStack: capture frame not found; keeping the full stack");
                0
            });
        let frames = physical[start..].iter().flat_map(expand_frame).collect();
        Self { frames }
    }

    /// Number of logical frames in the snapshot.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn capture_frame_index(frames: &[BacktraceFrame], marker: usize) -> Option<usize> {
    frames
        .iter()
        .position(|f| f.symbol_address() as usize == marker)
        .or_else(|| frames.iter().position(is_capture_symbol))
}

// Fallback for unwinders that report the instruction pointer as the symbol
// address.
fn is_capture_symbol(frame: &BacktraceFrame) -> bool {
    frame.symbols().iter().any(|s| {
        s.name().is_some_and(|n| {
            let name = format!("{n:#}");
            name.contains("HostStacks as ") && name.ends_with("StackProvider>::capture")
        })
    })
}

fn expand_frame(frame: &BacktraceFrame) -> Vec<HostFrame> {
    let pc = frame.ip() as usize;
    let symbols = frame.symbols();
    if symbols.is_empty() {
        return vec![HostFrame {
            pc,
            filename: None,
            lineno: None,
            function: None,
        }];
    }
    symbols
        .iter()
        .map(|s| HostFrame {
            pc,
            filename: s.filename().map(|p| p.display().to_string()),
            lineno: s.lineno(),
            function: s.name().map(|n| format!("{n:#}")),
        })
        .collect()
}

impl StackSource for HostStack {
    fn frame_at(&self, depth: usize) -> Option<StackFrame> {
        let frame = self.frames.get(depth)?;
        Some(StackFrame::new(
            frame.pc,
            frame.filename.as_deref().unwrap_or(UNKNOWN_FILE),
            frame.lineno.unwrap_or(0),
        ))
    }

    fn function_name(&self, pc: usize) -> Option<String> {
        self.frames
            .iter()
            .find(|f| f.pc == pc)
            .and_then(|f| f.function.clone())
    }
}
