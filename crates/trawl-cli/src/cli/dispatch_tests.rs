//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Positional shifting: -p shifts the lone positional to the document
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Per-command flags: `--strict` means different things per command

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command};

#[test]
fn exec_two_positionals() {
    let m = exec_command()
        .try_get_matches_from(["exec", "pattern.html", "page.html"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.html")));
    assert_eq!(params.document_path, Some(PathBuf::from("page.html")));
    assert!(params.pattern_text.is_none());
    assert!(!params.strict);
    assert!(!params.all);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn exec_pattern_text_shifts_positional() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "<b>${x}</b>", "page.html"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_text.as_deref(), Some("<b>${x}</b>"));
    assert_eq!(params.pattern_path, None);
    assert_eq!(params.document_path, Some(PathBuf::from("page.html")));
}

#[test]
fn exec_all_inline() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "<b>${x}</b>", "-d", "<b>1</b>"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.document_text.as_deref(), Some("<b>1</b>"));
    assert_eq!(params.document_path, None);
}

#[test]
fn exec_match_flags() {
    let m = exec_command()
        .try_get_matches_from([
            "exec",
            "p.html",
            "d.html",
            "--strict",
            "--all",
            "--no-trim",
            "--recursion-limit",
            "12",
            "--config",
            "opts.json",
            "--compact",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert!(params.strict);
    assert!(params.all);
    assert!(params.no_trim);
    assert_eq!(params.recursion_limit, Some(12));
    assert_eq!(params.config, Some(PathBuf::from("opts.json")));
    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn exec_compact_is_never_pretty() {
    let m = exec_command()
        .try_get_matches_from(["exec", "p.html", "d.html", "--compact", "--color", "always"])
        .unwrap();
    let args: crate::commands::exec::ExecArgs = ExecParams::from_matches(&m).into();

    assert!(!args.pretty);
    assert!(args.color);
}

#[test]
fn exec_rejects_bad_recursion_limit() {
    let result = exec_command().try_get_matches_from(["exec", "p.html", "d.html", "--recursion-limit", "deep"]);

    assert!(result.is_err());
}

#[test]
fn exec_rejects_unknown_color() {
    let result = exec_command().try_get_matches_from(["exec", "p.html", "d.html", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn dump_params() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-p", "<li>${x}</li>", "--no-trim"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.pattern_text.as_deref(), Some("<li>${x}</li>"));
    assert!(params.no_trim);
}

#[test]
fn dump_has_no_match_flags() {
    let result = dump_command().try_get_matches_from(["dump", "p.html", "--all"]);

    assert!(result.is_err());
}

#[test]
fn check_strict_means_deny_warnings() {
    let m = check_command()
        .try_get_matches_from(["check", "p.html", "--strict"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("p.html")));
    assert!(params.strict);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["trawl", "check", "p.html", "-vv"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();

    assert_eq!(name, "check");
    assert_eq!(sub.get_count("verbose"), 2);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["trawl"]).is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();

    for name in ["exec", "dump", "check"] {
        assert!(help.contains(name), "missing {name} in help:\n{help}");
    }
}
