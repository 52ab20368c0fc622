//! Rules that drive caller-trail construction.
//!
//! [`TrailConfig`] bundles every knob the stack walker consults: which helper
//! directories to hide, which function names end the walk, and how many
//! leading trail entries the reporters drop. The default configuration
//! reproduces the classic rules; [`TrailConfig::rust_harness`] retargets the
//! boundary rules at libtest so host-captured stacks stop at the test.

use thiserror::Error;

use crate::frame_filter::{ALWAYS_INCLUDED_FILE, BOUNDARY_PREFIXES, HELPER_DIRS};

/// File name reported for synthesised frames that have no real source.
pub const SYNTHETIC_FILE: &str = "<autogenerated>";

/// Per-test dispatch function of the classic test runner.
pub const RUNNER_DISPATCH_FUNCTION: &str = "testing.tRunner";

/// Frames libtest places between the harness and a `#[test]` body.
pub const LIBTEST_DISPATCH_FUNCTIONS: &[&str] = &[
    "test::__rust_begin_short_backtrace",
    "core::ops::function::FnOnce::call_once",
];

/// Trail entries dropped by reporters: the walker entry and the reporter.
pub const DEFAULT_SKIP: usize = 2;

/// Errors that may occur while building a [`TrailConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An empty boundary prefix would classify every name as a boundary.
    #[error("boundary prefixes must not be empty")]
    EmptyBoundaryPrefix,
    /// The qualifier separator is empty.
    #[error("qualifier separator must not be empty")]
    EmptySeparator,
    /// The synthetic file marker is empty.
    #[error("synthetic file marker must not be empty")]
    EmptySyntheticMarker,
}

/// Validated walker configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailConfig {
    helper_dirs: Vec<String>,
    always_included_file: String,
    synthetic_file: String,
    boundary_prefixes: Vec<String>,
    dispatch_functions: Vec<String>,
    qualifier_separator: String,
    skip: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            helper_dirs: to_owned_vec(HELPER_DIRS),
            always_included_file: ALWAYS_INCLUDED_FILE.to_string(),
            synthetic_file: SYNTHETIC_FILE.to_string(),
            boundary_prefixes: to_owned_vec(BOUNDARY_PREFIXES),
            dispatch_functions: vec![RUNNER_DISPATCH_FUNCTION.to_string()],
            qualifier_separator: ".".to_string(),
            skip: DEFAULT_SKIP,
        }
    }
}

impl TrailConfig {
    /// Start a [`TrailConfigBuilder`] seeded with the default rules.
    pub fn builder() -> TrailConfigBuilder {
        TrailConfigBuilder::new()
    }

    /// Rules for stacks captured inside a `cargo test` binary.
    ///
    /// Function names are qualified with `::` and the walk stops at the
    /// libtest frames that invoke each test body.
    pub fn rust_harness() -> Self {
        Self {
            dispatch_functions: to_owned_vec(LIBTEST_DISPATCH_FUNCTIONS),
            qualifier_separator: "::".to_string(),
            ..Self::default()
        }
    }

    pub fn helper_dirs(&self) -> &[String] {
        &self.helper_dirs
    }

    pub fn always_included_file(&self) -> &str {
        &self.always_included_file
    }

    pub fn synthetic_file(&self) -> &str {
        &self.synthetic_file
    }

    pub fn boundary_prefixes(&self) -> &[String] {
        &self.boundary_prefixes
    }

    pub fn dispatch_functions(&self) -> &[String] {
        &self.dispatch_functions
    }

    pub fn qualifier_separator(&self) -> &str {
        &self.qualifier_separator
    }

    /// Number of leading trail entries dropped by the reporters.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Report whether `name` is one of the runner dispatch functions.
    pub fn is_dispatch_function(&self, name: &str) -> bool {
        self.dispatch_functions.iter().any(|f| f == name)
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Builder for [`TrailConfig`].
#[derive(Clone, Debug)]
pub struct TrailConfigBuilder {
    config: TrailConfig,
}

impl Default for TrailConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailConfigBuilder {
    /// Create a new `TrailConfigBuilder` with the default rules.
    pub fn new() -> Self {
        Self {
            config: TrailConfig::default(),
        }
    }

    /// Start from an existing configuration, such as a preset.
    pub fn from_config(config: TrailConfig) -> Self {
        Self { config }
    }

    /// Replace the helper directory denylist.
    pub fn with_helper_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.helper_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file name recorded even inside helper directories.
    pub fn with_always_included_file(mut self, file: impl Into<String>) -> Self {
        self.config.always_included_file = file.into();
        self
    }

    /// Set the file name that marks synthesised frames.
    pub fn with_synthetic_file(mut self, file: impl Into<String>) -> Self {
        self.config.synthetic_file = file.into();
        self
    }

    /// Replace the boundary prefixes.
    pub fn with_boundary_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.boundary_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the runner dispatch functions.
    pub fn with_dispatch_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.dispatch_functions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the separator between a function's qualifier and its short name.
    pub fn with_qualifier_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.qualifier_separator = separator.into();
        self
    }

    /// Set how many leading trail entries the reporters drop.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.config.skip = skip;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a boundary prefix, the qualifier
    /// separator, or the synthetic file marker is empty.
    pub fn build(self) -> Result<TrailConfig, ConfigError> {
        if self.config.boundary_prefixes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyBoundaryPrefix);
        }
        if self.config.qualifier_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.config.synthetic_file.is_empty() {
            return Err(ConfigError::EmptySyntheticMarker);
        }
        Ok(self.config)
    }
}
