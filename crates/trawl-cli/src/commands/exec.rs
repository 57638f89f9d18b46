use std::path::PathBuf;

use trawl_lib::{Colors, MatchOptions, Query, Value};

use super::input::{fail, is_stdin, require};

pub struct ExecArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub document_path: Option<PathBuf>,
    pub document_text: Option<String>,
    pub strict: bool,
    pub all: bool,
    pub no_trim: bool,
    pub recursion_limit: Option<u32>,
    pub config: Option<PathBuf>,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    if is_stdin(args.pattern_path.as_deref()) && is_stdin(args.document_path.as_deref()) {
        fail("pattern and document cannot both be from stdin");
    }

    let options = resolve_options(&args).unwrap_or_else(|e| fail(e));
    tracing::debug!(?options, "match options");

    let pattern = require(args.pattern_text.as_deref(), args.pattern_path.as_deref(), "pattern")
        .unwrap_or_else(|e| fail(e));
    let document = require(
        args.document_text.as_deref(),
        args.document_path.as_deref(),
        "document",
    )
    .unwrap_or_else(|e| fail(e));

    let query = Query::with_options(&pattern, options).unwrap_or_else(|e| fail(e));
    let colors = Colors::new(args.color);

    let output = if args.all {
        let records = query.extract_all(&document);
        Value::Array(records.into_iter().map(Value::Object).collect()).format(args.pretty, colors)
    } else {
        match query.extract(&document) {
            Some(record) => record.format(args.pretty, colors),
            None => fail("no match"),
        }
    };
    println!("{output}");
}

/// Options file first, then explicit flags on top.
fn resolve_options(args: &ExecArgs) -> trawl_lib::Result<MatchOptions> {
    let mut options = match &args.config {
        Some(path) => MatchOptions::from_file(path)?,
        None => MatchOptions::default(),
    };
    if args.strict {
        options = options.strict(true);
    }
    if args.no_trim {
        options = options.trim_text(false);
    }
    if let Some(limit) = args.recursion_limit {
        options = options.recursion_limit(limit);
    }
    Ok(options)
}
