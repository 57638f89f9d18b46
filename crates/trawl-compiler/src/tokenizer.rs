//! Placeholder tokenizer.
//!
//! Splits a literal string (attribute value or shallow element text) into
//! framers. Each placeholder becomes one [`Framer`] whose `start` is the
//! literal text right before it and whose `end` is the literal text right
//! after it, up to the next placeholder or the end of the string:
//!
//! ```text
//! "Name: ${first} ${last}!"
//!   framer(first): start = "Name: ", end = " "
//!   framer(last):  start = " ",      end = "!"
//! ```
//!
//! Two placeholder forms exist:
//! - `${path}`: a field path. Only ASCII alphanumerics and `._[]:` are kept;
//!   anything else inside the braces is dropped.
//! - `${/regex/flags}`: an inline validator. The body is taken verbatim up to
//!   the first unescaped `/`, then flags up to `}`.

use std::iter::Peekable;
use std::str::Chars;

/// Start/end literal pair around one placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framer {
    pub start: String,
    pub end: String,
    pub field: FieldSpec,
}

/// What a placeholder stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSpec {
    /// Destination path of the extracted text.
    Path(String),
    /// Inline regex the text must match. Produces no output.
    Validator { pattern: String, flags: String },
}

impl FieldSpec {
    /// Classify a raw placeholder name.
    ///
    /// A name is a validator iff it starts with `/` and has a closing `/`
    /// somewhere after it. Whatever follows the closing `/` is the flags.
    pub fn parse(name: &str) -> Self {
        if let Some(rest) = name.strip_prefix('/')
            && let Some(close) = rest.rfind('/')
        {
            return FieldSpec::Validator {
                pattern: rest[..close].to_owned(),
                flags: rest[close + 1..].to_owned(),
            };
        }
        FieldSpec::Path(name.to_owned())
    }

    pub fn is_validator(&self) -> bool {
        matches!(self, FieldSpec::Validator { .. })
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSpec::Path(path) => f.write_str(path),
            FieldSpec::Validator { pattern, flags } => write!(f, "/{pattern}/{flags}"),
        }
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '[' | ']' | ':')
}

/// Framer being built: start literal and name known, end still pending.
struct Open {
    start: String,
    name: String,
}

impl Open {
    fn close(self, end: String) -> Option<Framer> {
        if self.name.is_empty() {
            return None;
        }
        Some(Framer {
            start: self.start,
            end,
            field: FieldSpec::parse(&self.name),
        })
    }
}

/// Result of [`scan`]: the framers plus any placeholder left open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scan {
    pub framers: Vec<Framer>,
    /// Raw text from an unterminated `${` to the end of the input. It is kept
    /// as literal text, along with any placeholders it swallowed.
    pub unterminated: Option<String>,
}

/// Tokenize `text` into framers. Placeholder-free input yields nothing.
pub fn tokenize(text: &str) -> Vec<Framer> {
    scan(text).framers
}

/// Like [`tokenize`], but also reports an unterminated placeholder.
pub fn scan(text: &str) -> Scan {
    let mut framers = Vec::new();
    let mut unterminated = None;
    let mut literal = String::new();
    let mut open = Open {
        start: String::new(),
        name: String::new(),
    };

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' || chars.peek() != Some(&'{') {
            literal.push(c);
            continue;
        }
        chars.next();

        match scan_placeholder(&mut chars) {
            Ok(name) => {
                let boundary = std::mem::take(&mut literal);
                let next = Open {
                    start: boundary.clone(),
                    name,
                };
                framers.extend(std::mem::replace(&mut open, next).close(boundary));
            }
            Err(consumed) => {
                let raw = format!("${{{consumed}");
                literal.push_str(&raw);
                unterminated = Some(raw);
            }
        }
    }
    framers.extend(open.close(literal));
    Scan {
        framers,
        unterminated,
    }
}

/// Scan one placeholder after its `${`.
///
/// Returns the name on `}`, or the raw consumed text if the input ends first.
fn scan_placeholder(chars: &mut Peekable<Chars<'_>>) -> Result<String, String> {
    let mut consumed = String::new();
    let mut name = String::new();

    if chars.next_if_eq(&'/').is_some() {
        consumed.push('/');
        name.push('/');
        let mut escaped = false;
        let mut body_closed = false;
        for c in chars.by_ref() {
            consumed.push(c);
            if body_closed {
                if c == '}' {
                    return Ok(name);
                }
                name.push(c);
                continue;
            }
            name.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '/' {
                body_closed = true;
            }
        }
        return Err(consumed);
    }

    for c in chars.by_ref() {
        consumed.push(c);
        if c == '}' {
            return Ok(name);
        }
        if is_path_char(c) {
            name.push(c);
        }
    }
    Err(consumed)
}
