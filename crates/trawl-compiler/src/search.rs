//! Compiled delimiters and inline validators.
//!
//! Both are built once per pattern so matching never re-parses strings.
//!
//! Delimiters are searched as regular expressions, not as literal text: a
//! delimiter `a.c` also matches `abc`, and `Cost: $` can never match because
//! `$` anchors. Callers rely on this, so it is kept. A delimiter that is not a
//! valid regex falls back to literal search.
//!
//! Validators fail open: a `${/regex/flags}` that does not compile accepts
//! any text.

use std::ops::Range;

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};

/// Literal text around a placeholder, compiled for searching.
#[derive(Clone, Debug)]
pub struct Delimiter {
    source: String,
    regex: Option<Regex>,
}

impl Delimiter {
    pub fn new(source: &str) -> Self {
        let regex = match Regex::new(source) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::debug!(delimiter = source, %err, "delimiter searched literally");
                None
            }
        };
        Self {
            source: source.to_owned(),
            regex,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Empty delimiters match at the search position; an empty end delimiter
    /// means "to the end of the text".
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether the source failed to compile and is searched literally.
    pub fn is_literal(&self) -> bool {
        self.regex.is_none()
    }

    /// Byte range of the first occurrence starting at or after `from`.
    pub fn find_at(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        match &self.regex {
            Some(regex) => regex
                .search(&Input::new(haystack).range(from..))
                .map(|m| m.range()),
            None => haystack[from..]
                .find(&self.source)
                .map(|at| from + at..from + at + self.source.len()),
        }
    }
}

/// Inline `${/pattern/flags}` check.
#[derive(Clone, Debug)]
pub struct Validator {
    pattern: String,
    flags: String,
    sticky: bool,
    regex: Result<Regex, String>,
}

impl Validator {
    /// Compile a validator. Compilation errors are kept, not raised.
    ///
    /// Supported flags: `i` (case-insensitive), `m` (multi-line), `s` (dot
    /// matches newline), `x` (ignore whitespace), `u` (unicode), `y` (match
    /// only at the start). `g` and `d` have no effect on a single test. Any
    /// other flag makes the validator malformed.
    pub fn new(pattern: &str, flags: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            flags: flags.to_owned(),
            sticky: flags.contains('y'),
            regex: build_regex(pattern, flags),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Compilation error, if the validator is malformed.
    pub fn error(&self) -> Option<&str> {
        self.regex.as_ref().err().map(String::as_str)
    }

    /// Check extracted text. Absent text never passes; malformed validators
    /// accept anything else.
    pub fn is_match(&self, text: Option<&str>) -> bool {
        let Some(text) = text else {
            return false;
        };
        match &self.regex {
            Ok(regex) if self.sticky => regex.is_match(Input::new(text).anchored(Anchored::Yes)),
            Ok(regex) => regex.is_match(text),
            Err(_) => true,
        }
    }
}

fn build_regex(pattern: &str, flags: &str) -> Result<Regex, String> {
    let mut config = syntax::Config::new();
    for flag in flags.chars() {
        config = match flag {
            'i' => config.case_insensitive(true),
            'm' => config.multi_line(true),
            's' => config.dot_matches_new_line(true),
            'x' => config.ignore_whitespace(true),
            'u' => config.unicode(true),
            'g' | 'd' | 'y' => config,
            other => return Err(format!("unknown regex flag '{other}'")),
        };
    }
    Regex::builder()
        .syntax(config)
        .build(pattern)
        .map_err(|e| e.to_string())
}
