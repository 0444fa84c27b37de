//! Run configuration and case selection.

use regex::Regex;

use crate::case::TestCase;
use crate::error::ConfigError;

/// Environment variable holding a regex that case names must match.
pub const FILTER_VAR: &str = "PARAM_FILTER";
/// Environment variable that turns on per-case PASS lines.
pub const VERBOSE_VAR: &str = "PARAM_VERBOSE";

/// Configuration for running and reporting a suite.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub filter: Option<Regex>,
    pub verbose: bool,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            verbose: false,
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl RunConfig {
    /// Reads `PARAM_FILTER` and `PARAM_VERBOSE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RunConfig::from_env`], with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(pattern) = lookup(FILTER_VAR).filter(|p| !p.is_empty()) {
            config = config.with_filter(&pattern)?;
        }
        config.verbose = lookup(VERBOSE_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(config)
    }

    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        self.filter = Some(regex);
        Ok(self)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Why `case` should not run, or `None` if it should.
    ///
    /// `has_only` is true when some case in the same table is marked `only`.
    pub fn skip_reason<I, O>(&self, case: &TestCase<I, O>, has_only: bool) -> Option<String> {
        if has_only && !case.only {
            return Some("Not marked 'only' in 'only' mode".to_string());
        }
        if let Some(reason) = &case.skip {
            return Some(format!("Marked 'skip': {}", reason));
        }
        if let Some(filter) = &self.filter {
            if !filter.is_match(&case.name) {
                return Some(format!("Filtered out by pattern: {}", filter.as_str()));
            }
        }
        None
    }
}
