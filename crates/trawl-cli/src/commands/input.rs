//! Loading pattern and document markup from files, stdin, or inline text.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use trawl_lib::{Error, Result};

/// Path that means "read stdin".
pub const STDIN: &str = "-";

pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_some_and(|p| p.as_os_str() == STDIN)
}

/// Inline text wins over a path. `None` when neither is given.
pub fn load(text: Option<&str>, path: Option<&Path>) -> Result<Option<String>> {
    if let Some(text) = text {
        return Ok(Some(text.to_owned()));
    }
    let Some(path) = path else {
        return Ok(None);
    };
    if path.as_os_str() == STDIN {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(Some(buf));
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })
}

/// Like [`load`], but a missing input is an error naming `what`.
pub fn require(text: Option<&str>, path: Option<&Path>, what: &str) -> std::result::Result<String, String> {
    match load(text, path) {
        Ok(Some(content)) => Ok(content),
        Ok(None) => Err(format!(
            "{what} is required: use a positional argument or the inline flag"
        )),
        Err(e) => Err(e.to_string()),
    }
}

/// Print `error: ...` and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1)
}
