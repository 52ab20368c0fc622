//! Logical stack frame records read from a [`StackSource`].
//!
//! A [`StackFrame`] carries only the location data available for a given
//! stack depth. The owning function name is resolved separately from the
//! frame's program counter, mirroring how runtime introspection facilities
//! split "where" from "who".
//!
//! [`StackSource`]: crate::stack_source::StackSource

use std::fmt;

/// File reported for frames whose source location could not be resolved.
pub const UNKNOWN_FILE: &str = "?";

/// A single frame in a captured call stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackFrame {
    /// Program counter identifying the frame within its stack source.
    pub pc: usize,
    /// Source filename as reported by the stack source, usually a full path.
    pub filename: String,
    /// Line number in the source file.
    pub lineno: u32,
}

impl StackFrame {
    /// Create a new `StackFrame` for the given program counter and location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caller_trail::StackFrame;
    ///
    /// let frame = StackFrame::new(0x1000, "src/parser/lexer.rs", 42);
    /// assert_eq!(frame.location(), "lexer.rs:42");
    /// ```
    pub fn new(pc: usize, filename: impl Into<String>, lineno: u32) -> Self {
        Self {
            pc,
            filename: filename.into(),
            lineno,
        }
    }

    /// Return the `file:line` entry used in caller trails.
    ///
    /// Only the last path segment of the filename is kept.
    pub fn location(&self) -> String {
        format!("{}:{}", crate::frame_filter::file_name(&self.filename), self.lineno)
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (pc {:#x})", self.filename, self.lineno, self.pc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/home/dev/project/src/lib.rs", 7, "lib.rs:7")]
    #[case("src/parser/lexer.rs", 120, "lexer.rs:120")]
    #[case("main.go", 3, "main.go:3")]
    #[case(r"C:\work\project\src\util.rs", 9, "util.rs:9")]
    fn location_keeps_bare_file_name(
        #[case] filename: &str,
        #[case] lineno: u32,
        #[case] expected: &str,
    ) {
        let frame = StackFrame::new(0, filename, lineno);
        assert_eq!(frame.location(), expected);
    }

    #[rstest]
    fn display_includes_full_path_and_pc() {
        let frame = StackFrame::new(0x2a, "a/b.rs", 1);
        assert_eq!(frame.to_string(), "a/b.rs:1 (pc 0x2a)");
    }
}
