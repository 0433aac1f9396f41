mod cli;
mod commands;

use std::process::ExitCode;

use cli::{build_cli, Params};
use suggest::logging;

/// Exit code for configuration and I/O failures.
const ERROR: u8 = 3;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    if m.get_flag("log_json") {
        logging::init_tracing_json();
    } else {
        logging::init_tracing();
    }

    let params = Params::from_matches(m);
    let outcome = match name {
        "query" => commands::query(params),
        "autocorrect" => commands::autocorrect(params),
        "exact" => commands::exact(params),
        "distance" => commands::distance(params),
        "match" => commands::match_request(params),
        _ => unreachable!("clap should have caught this"),
    };

    outcome.unwrap_or_else(|err| {
        tracing::error!(error = %err, "command failed");
        eprintln!("error: {err:#}");
        ExitCode::from(ERROR)
    })
}
