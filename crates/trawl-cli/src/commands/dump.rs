use std::path::PathBuf;

use trawl_lib::{Colors, MatchOptions, Query};

use super::input::{fail, require};

pub struct DumpArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub no_trim: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = require(args.pattern_text.as_deref(), args.pattern_path.as_deref(), "pattern")
        .unwrap_or_else(|e| fail(e));

    // Strict skips selector construction; dumping must not fail on it.
    let options = MatchOptions::new().strict(true).trim_text(!args.no_trim);
    let query = Query::with_options(&pattern, options).unwrap_or_else(|e| fail(e));

    print!("{}", query.pattern().dump().colored(Colors::new(args.color)));
}
