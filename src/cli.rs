//! Command-line definition and argument extraction.
//!
//! Arg builders are shared between subcommands; `Params::from_matches` pulls
//! the values back out of clap.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("suggest")
        .about("Weighted edit distance and command autocorrect")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_json_arg())
        .subcommand(query_command())
        .subcommand(autocorrect_command())
        .subcommand(exact_command())
        .subcommand(distance_command())
        .subcommand(match_command())
}

fn query_command() -> Command {
    with_option_args(
        Command::new("query")
            .about("List candidates within the similarity threshold")
            .arg(query_arg().required(true))
            .arg(candidates_arg())
            .arg(candidates_file_arg())
            .arg(
                Arg::new("no_autocorrect")
                    .long("no-autocorrect")
                    .action(ArgAction::SetTrue)
                    .help("Do not pick an autocorrect suggestion"),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the result as JSON"),
            ),
    )
}

fn autocorrect_command() -> Command {
    with_option_args(
        Command::new("autocorrect")
            .about("Print the single closest candidate")
            .arg(query_arg().required(true))
            .arg(candidates_arg())
            .arg(candidates_file_arg()),
    )
}

fn exact_command() -> Command {
    Command::new("exact")
        .about("Print the candidate equal to the query ignoring case")
        .arg(query_arg().required(true))
        .arg(candidates_arg())
        .arg(candidates_file_arg())
}

fn distance_command() -> Command {
    with_option_args(
        Command::new("distance")
            .about("Print the weighted edit distance between two strings")
            .arg(query_arg().required(true))
            .arg(
                Arg::new("candidate")
                    .value_name("CANDIDATE")
                    .required(true)
                    .help("String to transform the query into"),
            ),
    )
}

fn match_command() -> Command {
    with_option_args(
        Command::new("match")
            .about("Answer a match request as JSON (foo, bar, baz when no candidates are given)")
            .arg(query_arg())
            .arg(candidates_arg())
            .arg(candidates_file_arg()),
    )
}

/// Options file and per-cost overrides.
fn with_option_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("JSON options file"),
    )
    .arg(cost_arg("cost_swap", "cost-swap", "Cost of swapping two adjacent characters"))
    .arg(cost_arg("cost_substitution", "cost-substitution", "Cost of a substitution"))
    .arg(cost_arg("cost_insertion", "cost-insertion", "Cost of an insertion"))
    .arg(cost_arg("cost_deletion", "cost-deletion", "Cost of a deletion"))
    .arg(cost_arg("threshold", "threshold", "Highest score still counted as a match"))
}

fn cost_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("N")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
        .help(help)
        .long_help(format!(
            "{help}. Replaces the config file value; 0 or less selects the default"
        ))
}

/// Log output as JSON (--log-json).
fn log_json_arg() -> Arg {
    Arg::new("log_json")
        .long("log-json")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Emit logs as JSON on stderr")
}

fn query_arg() -> Arg {
    Arg::new("query").value_name("QUERY").help("Text to correct")
}

fn candidates_arg() -> Arg {
    Arg::new("candidates")
        .value_name("CANDIDATE")
        .num_args(1..)
        .help("Known commands to compare against")
}

fn candidates_file_arg() -> Arg {
    Arg::new("candidates_file")
        .long("candidates")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File with one candidate per line")
}

/// Option values given on the command line; `None` when the flag is absent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub cost_swap: Option<i64>,
    pub cost_substitution: Option<i64>,
    pub cost_insertion: Option<i64>,
    pub cost_deletion: Option<i64>,
    pub similarity_minimum: Option<i64>,
}

/// Values shared by every subcommand.
#[derive(Debug, Default)]
pub struct Params {
    pub query: Option<String>,
    pub candidate: Option<String>,
    pub candidates: Vec<String>,
    pub candidates_file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub no_autocorrect: bool,
    pub json: bool,
}

impl Params {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: get_string(m, "query"),
            candidate: get_string(m, "candidate"),
            candidates: m
                .try_get_many::<String>("candidates")
                .ok()
                .flatten()
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            candidates_file: get_path(m, "candidates_file"),
            config: get_path(m, "config"),
            overrides: Overrides {
                cost_swap: get_i64(m, "cost_swap"),
                cost_substitution: get_i64(m, "cost_substitution"),
                cost_insertion: get_i64(m, "cost_insertion"),
                cost_deletion: get_i64(m, "cost_deletion"),
                similarity_minimum: get_i64(m, "threshold"),
            },
            no_autocorrect: get_flag(m, "no_autocorrect"),
            json: get_flag(m, "json"),
        }
    }
}

// Not every subcommand defines every arg; absent ids read as unset.

fn get_string(m: &ArgMatches, id: &str) -> Option<String> {
    m.try_get_one::<String>(id).ok().flatten().cloned()
}

fn get_path(m: &ArgMatches, id: &str) -> Option<PathBuf> {
    m.try_get_one::<PathBuf>(id).ok().flatten().cloned()
}

fn get_i64(m: &ArgMatches, id: &str) -> Option<i64> {
    m.try_get_one::<i64>(id).ok().flatten().copied()
}

fn get_flag(m: &ArgMatches, id: &str) -> bool {
    m.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}
