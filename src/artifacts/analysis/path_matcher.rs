//! Exclusion pattern matching
//!
//! Patterns use the source store's path conventions:
//!
//! - `*` matches any run of characters within one path segment
//! - `?` matches one character other than a separator
//! - `**` matches any run of characters, separators included
//! - `/` and `\` are interchangeable separators
//! - matching ignores case
//!
//! A pattern matches a path when it matches a trailing run of whole
//! segments of that path, so `*.tmp` excludes `.tmp` files at any depth and
//! `*/secrets/*` excludes the direct children of every `secrets` project.
//!
//! All patterns of a configuration string are compiled into one regex.

use crate::artifacts::analysis::PATTERN_DELIMITER;
use crate::artifacts::core::error::PatternError;
use regex::{Regex, RegexBuilder};

const SEPARATOR_CLASS: &str = r"[/\\]";
const SEGMENT_CHAR_CLASS: &str = r"[^/\\]";

#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    patterns: Vec<String>,
    regex: Option<Regex>,
}

impl PathMatcher {
    /// Compile a semicolon-delimited pattern list
    ///
    /// An empty configuration yields a matcher that matches nothing.
    pub fn new(config: &str) -> Result<Self, PatternError> {
        Self::from_patterns(config.split(PATTERN_DELIMITER))
    }

    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().trim().to_string())
            .filter(|pattern| !pattern.is_empty())
            .collect();

        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let alternatives = patterns
            .iter()
            .map(|pattern| format!("(?:{})", glob_to_regex(pattern)))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&alternatives)
            .case_insensitive(true)
            .build()
            .map_err(|err| PatternError::new(patterns.join(PATTERN_DELIMITER), err))?;

        Ok(Self {
            patterns,
            regex: Some(regex),
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(path))
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let pattern = pattern.trim_start_matches(['/', '\\']);
    let mut regex = format!("(?:^|{SEPARATOR_CLASS})");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                regex.push_str(".*");
            }
            '*' => {
                regex.push_str(SEGMENT_CHAR_CLASS);
                regex.push('*');
            }
            '?' => regex.push_str(SEGMENT_CHAR_CLASS),
            '/' | '\\' => regex.push_str(SEPARATOR_CLASS),
            _ => regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex.push('$');
    regex
}
