//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("trawl")
        .about("Extract structured records from HTML by example")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(exec_command())
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Match a pattern against a document and print the record as JSON.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Extract a record from a document and output JSON")
        .override_usage(
            "\
  trawl exec <PATTERN> <DOCUMENT>
  trawl exec -p <TEXT> <DOCUMENT>
  trawl exec -p <TEXT> -d <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  trawl exec person.html page.html              # two positional files
  trawl exec -p '<b class="n">${name}</b>' -    # inline pattern, document on stdin
  trawl exec person.html page.html --all        # one record per hit
  trawl exec person.html page.html --strict     # match the document root only"#,
        )
        .arg(pattern_path_arg())
        .arg(document_path_arg())
        .arg(pattern_text_arg())
        .arg(document_text_arg())
        .arg(strict_match_arg())
        .arg(all_arg())
        .arg(no_trim_arg())
        .arg(recursion_limit_arg())
        .arg(config_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Show the compiled pattern tree.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled pattern tree")
        .override_usage(
            "\
  trawl dump <PATTERN>
  trawl dump -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  trawl dump person.html                  # from file
  trawl dump -p '<li>${items[]}</li>'     # inline pattern"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(no_trim_arg())
        .arg(color_arg())
}

/// Report pattern warnings.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern and report warnings")
        .override_usage(
            "\
  trawl check <PATTERN>
  trawl check -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  trawl check person.html                 # print warnings
  trawl check person.html --strict        # fail on warnings"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(deny_warnings_arg())
        .arg(color_arg())
}
