//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file (positional).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("PATTERN")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file (`-` for stdin)")
}

/// Inline pattern markup (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .help("Inline pattern markup")
}

/// Document to extract from (positional).
pub fn document_path_arg() -> Arg {
    Arg::new("document_path")
        .value_name("DOCUMENT")
        .value_parser(value_parser!(PathBuf))
        .help("HTML document (`-` for stdin)")
}

/// Inline document markup (-d/--document).
pub fn document_text_arg() -> Arg {
    Arg::new("document_text")
        .short('d')
        .long("document")
        .value_name("TEXT")
        .help("Inline document markup")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Match the document root only (--strict).
pub fn strict_match_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Match the pattern root against the document root only")
}

/// Treat warnings as errors (--strict).
pub fn deny_warnings_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// One record per hit (--all).
pub fn all_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Output a list with one record per matched element")
}

/// Keep surrounding whitespace of element text (--no-trim).
pub fn no_trim_arg() -> Arg {
    Arg::new("no_trim")
        .long("no-trim")
        .action(ArgAction::SetTrue)
        .help("Keep leading and trailing whitespace of element text")
}

/// Match options file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with match options (flags override it)")
}

/// Pattern depth limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum pattern depth followed while matching")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
