//! Loading case tables from YAML.
//!
//! A table is a list of mappings:
//!
//! ```yaml
//! - name: basic
//!   input: "one "
//!   expected: one
//! - name: pending
//!   input: "two"
//!   expected: two
//!   skip: not implemented yet
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::case::TestCase;
use crate::error::LoadError;

pub fn load_cases<I, O>(path: impl AsRef<Path>) -> Result<Vec<TestCase<I, O>>, LoadError>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_cases(&content)?;
    debug!(path = %path.display(), count = cases.len(), "loaded case table");
    Ok(cases)
}

pub fn parse_cases<I, O>(content: &str) -> Result<Vec<TestCase<I, O>>, LoadError>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    Ok(serde_yaml::from_str(content)?)
}
