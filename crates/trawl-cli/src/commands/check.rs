use std::path::PathBuf;

use trawl_lib::{Colors, MatchOptions, Query};

use super::input::{fail, require};

pub struct CheckArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = require(args.pattern_text.as_deref(), args.pattern_path.as_deref(), "pattern")
        .unwrap_or_else(|e| fail(e));

    // Compiled as for a document scan, so an unusable root selector is reported.
    let query = Query::with_options(&source, MatchOptions::default()).unwrap_or_else(|e| fail(e));
    let pattern = query.pattern();
    let c = Colors::new(args.color);

    for warning in pattern.warnings() {
        eprintln!("{}warning{}: {}", c.blue, c.reset, pattern.describe(warning));
    }

    if args.strict && !pattern.warnings().is_empty() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
