mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, DumpParams, ExecParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("exec", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("dump", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
