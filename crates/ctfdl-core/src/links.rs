//! External link scanning in challenge descriptions.

use regex::Regex;

const URL_PATTERN: &str = r"https?://[^\s]+";

/// Finds URL-shaped substrings. Built once per run.
#[derive(Debug, Clone)]
pub struct LinkScanner {
    re: Regex,
}

impl LinkScanner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(URL_PATTERN)?,
        })
    }

    /// Every match in order of appearance; duplicates are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
