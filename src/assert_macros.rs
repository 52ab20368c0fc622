//! Macro front-ends for the [`TestContext`] reporters.
//!
//! [`TestContext`]: crate::TestContext

/// Fail the current test with a `format!`-style message prefixed by the
/// caller trail.
///
/// The first argument is the [`TestContext`](crate::TestContext); the rest
/// are forwarded to [`format_args!`].
///
/// # Examples
///
/// ```rust,should_panic
/// use caller_trail::{assert_fail, TestContext};
///
/// let ctx = TestContext::new();
/// let retries = 5;
/// assert_fail!(ctx, "gave up after {} retries", retries);
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.assert_fail(::std::format_args!($($arg)+))
    };
}

/// Fail the current test unless two strings are equal.
///
/// Both values are borrowed as `&str`, so `String`, `&String` and literals
/// are accepted.
///
/// # Examples
///
/// ```rust
/// use caller_trail::{assert_equal, TestContext};
///
/// let ctx = TestContext::new();
/// let rendered = String::from("ok");
/// assert_equal!(ctx, "ok", rendered);
/// ```
#[macro_export]
macro_rules! assert_equal {
    ($ctx:expr, $expect:expr, $actual:expr $(,)?) => {
        $ctx.assert_equal(
            ::std::convert::AsRef::<str>::as_ref(&$expect),
            ::std::convert::AsRef::<str>::as_ref(&$actual),
        )
    };
}

/// Fail the current test unless two integers are equal.
///
/// Operands are converted with `i64::from`, so any integer type that widens
/// losslessly to `i64` is accepted.
///
/// # Examples
///
/// ```rust
/// use caller_trail::{assert_equal_int, TestContext};
///
/// let ctx = TestContext::new();
/// let parsed: u32 = 42;
/// assert_equal_int!(ctx, 42, parsed);
/// ```
#[macro_export]
macro_rules! assert_equal_int {
    ($ctx:expr, $expect:expr, $actual:expr $(,)?) => {
        $ctx.assert_equal_int(
            ::std::convert::From::from($expect),
            ::std::convert::From::from($actual),
        )
    };
}
