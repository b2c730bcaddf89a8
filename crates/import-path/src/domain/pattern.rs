//! Glob-like exclude patterns matched anywhere inside a path.

use regex::Regex;

/// A compiled set of exclude patterns.
///
/// Each source pattern is escaped literally except for `*`, which matches
/// any sequence of characters. A pattern matches when it is found anywhere
/// in the tested path; it does not need to cover the whole string.
#[derive(Clone, Debug)]
pub struct ExcludePatterns {
    compiled: Vec<Regex>,
}

impl ExcludePatterns {
    /// Compiles `patterns` into an exclude set.
    ///
    /// # Errors
    /// Returns an error when an escaped pattern still fails to compile,
    /// which only happens for pathological sizes.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let compiled = patterns
            .iter()
            .map(|pattern| Regex::new(&wildcard_to_regex(pattern.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { compiled })
    }

    /// Returns `true` when none of the patterns is found in `path`.
    pub fn should_include_path(&self, path: &str) -> bool {
        !self.compiled.iter().any(|regex| regex.is_match(path))
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*")
}
