//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls resolve TTY-dependent settings (color, pretty)
//! - `-p` shifts a single positional from pattern to document

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;

pub struct ExecParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub document_path: Option<PathBuf>,
    pub document_text: Option<String>,
    pub strict: bool,
    pub all: bool,
    pub no_trim: bool,
    pub recursion_limit: Option<u32>,
    pub config: Option<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_text = m.get_one::<String>("pattern_text").cloned();
        let (pattern_path, document_path) = shift_positional_to_document(
            pattern_text.is_some(),
            m.get_one::<PathBuf>("pattern_path").cloned(),
            m.get_one::<PathBuf>("document_path").cloned(),
        );

        Self {
            pattern_path,
            pattern_text,
            document_path,
            document_text: m.get_one::<String>("document_text").cloned(),
            strict: m.get_flag("strict"),
            all: m.get_flag("all"),
            no_trim: m.get_flag("no_trim"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            config: m.get_one::<PathBuf>("config").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            document_path: p.document_path,
            document_text: p.document_text,
            strict: p.strict,
            all: p.all,
            no_trim: p.no_trim,
            recursion_limit: p.recursion_limit,
            config: p.config,
            pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub no_trim: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            no_trim: m.get_flag("no_trim"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            no_trim: p.no_trim,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// With `-p`, a lone positional names the document, not the pattern.
fn shift_positional_to_document(
    has_pattern_text: bool,
    pattern_path: Option<PathBuf>,
    document_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_pattern_text && pattern_path.is_some() && document_path.is_none() {
        (None, pattern_path)
    } else {
        (pattern_path, document_path)
    }
}
