//! Frame classification rules used while walking a call stack.
//!
//! This module provides the pure predicates the stack walker applies to each
//! frame: deciding whether a function name marks a test boundary, whether a
//! frame belongs to an assertion or mocking helper library, and how to reduce
//! paths and qualified names to the short forms used in caller trails.
//!
//! # Usage
//!
//! The primary entry points are:
//! - [`is_test`] - Classify a short function name against a boundary prefix
//! - [`is_boundary`] - Classify a short function name against several prefixes
//! - [`should_record`] - Decide whether a frame's file belongs in the trail
//! - [`file_name`] - Reduce a path to its last segment
//! - [`short_function_name`] - Strip the qualifier from a function name
//!
//! # Example
//!
//! ```rust
//! use caller_trail::frame_filter::{is_boundary, short_function_name, should_record};
//! use caller_trail::frame_filter::{ALWAYS_INCLUDED_FILE, BOUNDARY_PREFIXES, HELPER_DIRS};
//!
//! assert!(should_record("pkg/widget/widget_test.go", HELPER_DIRS, ALWAYS_INCLUDED_FILE));
//! assert!(!should_record("vendor/assert/assertions.go", HELPER_DIRS, ALWAYS_INCLUDED_FILE));
//!
//! let name = short_function_name("example.com/pkg/widget.TestRender", ".");
//! assert!(is_boundary(name, BOUNDARY_PREFIXES));
//! ```

use unicode_general_category::{GeneralCategory, get_general_category};


/// Directory names that identify assertion and mocking helper libraries.
///
/// Frames whose immediate parent directory matches one of these are left out
/// of caller trails.
pub const HELPER_DIRS: &[&str] = &["assert", "mock", "require"];

/// File name that is recorded even when it lives in a helper directory.
///
/// The mocking library's own tests sit next to its sources, so their frames
/// would otherwise vanish from their failure messages.
pub const ALWAYS_INCLUDED_FILE: &str = "mock_test.go";

/// Prefixes of test, benchmark, and example entry points.
pub const BOUNDARY_PREFIXES: &[&str] = &["Test", "Benchmark", "Example"];

/// Report whether `name` looks like an entry point for `prefix`.
///
/// A name qualifies when it starts with `prefix` and either equals it or the
/// character following the prefix is not a lower-case letter (general
/// category `Ll`). `TestFoo`, `Test_foo` and `Testª` qualify for `Test`;
/// `Testify` does not.
///
/// # Examples
///
/// ```rust
/// use caller_trail::frame_filter::is_test;
///
/// assert!(is_test("Test", "Test"));
/// assert!(is_test("TestFoo", "Test"));
/// assert!(!is_test("Testfoo", "Test"));
/// assert!(!is_test("helper", "Test"));
/// ```
pub fn is_test(name: &str, prefix: &str) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    match rest.chars().next() {
        None => true,
        Some(c) => !is_lowercase_letter(c),
    }
}

// `char::is_lowercase` also accepts `Other_Lowercase` characters such as
// `ª` and `ⓐ`, which are not letters of category `Ll`.
fn is_lowercase_letter(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::LowercaseLetter)
}

/// Report whether `name` is an entry point for any of `prefixes`.
pub fn is_boundary<P: AsRef<str>>(name: &str, prefixes: &[P]) -> bool {
    prefixes.iter().any(|p| is_test(name, p.as_ref()))
}

/// Split a path into its parent directory segment and bare file name.
///
/// Both `/` and `\` are treated as separators. The parent is `None` when the
/// path has a single segment.
///
/// # Examples
///
/// ```rust
/// use caller_trail::frame_filter::split_path;
///
/// assert_eq!(split_path("a/mock/mock_test.go"), (Some("mock"), "mock_test.go"));
/// assert_eq!(split_path("main.go"), (None, "main.go"));
/// ```
pub fn split_path(path: &str) -> (Option<&str>, &str) {
    let mut segments = path.rsplit(['/', '\\']);
    // rsplit always yields at least one segment
    let file = segments.next().unwrap_or(path);
    (segments.next(), file)
}

/// Return the last path segment of `path`.
pub fn file_name(path: &str) -> &str {
    split_path(path).1
}

/// Strip the package or module qualifier from a function name.
///
/// Everything up to and including the last occurrence of `separator` is
/// removed. Names without the separator are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use caller_trail::frame_filter::short_function_name;
///
/// assert_eq!(short_function_name("github.com/acme/pkg.TestParse", "."), "TestParse");
/// assert_eq!(short_function_name("my_crate::tests::parses", "::"), "parses");
/// assert_eq!(short_function_name("main", "."), "main");
/// ```
pub fn short_function_name<'a>(name: &'a str, separator: &str) -> &'a str {
    match name.rfind(separator) {
        Some(idx) => &name[idx + separator.len()..],
        None => name,
    }
}

/// Report whether `dir` is one of the helper-library directories.
pub fn is_helper_dir<D: AsRef<str>>(dir: &str, helper_dirs: &[D]) -> bool {
    helper_dirs.iter().any(|d| d.as_ref() == dir)
}

/// Decide whether a frame located in `path` belongs in a caller trail.
///
/// Paths without a parent directory segment are never recorded. Otherwise
/// the frame is recorded unless its parent directory is a helper directory,
/// with `always_included` overriding the helper check.
pub fn should_record<D: AsRef<str>>(path: &str, helper_dirs: &[D], always_included: &str) -> bool {
    match split_path(path) {
        (None, _) => false,
        (Some(dir), file) => !is_helper_dir(dir, helper_dirs) || file == always_included,
    }
}
