//! Subcommand handlers.
//!
//! Each handler returns the process exit code: 0 when something was found,
//! 1 when nothing was, 2 when the match request lacked a query.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use suggest::api::{self, MatchStatus};
use suggest::{loader, Options, Suggest};

use crate::cli::Params;

const NOT_FOUND: u8 = 1;
const BAD_REQUEST: u8 = 2;

/// Options from `--config`, then per-flag overrides on top.
fn build_options(p: &Params) -> Result<Options> {
    let mut options = match &p.config {
        Some(path) => loader::options_from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };

    let o = &p.overrides;
    for (field, value) in [
        (&mut options.cost_swap, o.cost_swap),
        (&mut options.cost_substitution, o.cost_substitution),
        (&mut options.cost_insertion, o.cost_insertion),
        (&mut options.cost_deletion, o.cost_deletion),
        (&mut options.similarity_minimum, o.similarity_minimum),
    ] {
        if let Some(value) = value {
            *field = value;
        }
    }
    if p.no_autocorrect {
        options.autocorrect_disabled = true;
    }
    Ok(options)
}

fn build_candidates(p: &Params) -> Result<Vec<String>> {
    let mut candidates = p.candidates.clone();
    if let Some(path) = &p.candidates_file {
        let from_file = loader::candidates_from_file(path)
            .with_context(|| format!("reading candidates from {}", path.display()))?;
        candidates.extend(from_file);
    }
    debug!(count = candidates.len(), "candidates ready");
    Ok(candidates)
}

fn found(hit: bool) -> ExitCode {
    if hit {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(NOT_FOUND)
    }
}

fn query_text(p: &Params) -> &str {
    p.query.as_deref().unwrap_or_default()
}

pub fn query(p: Params) -> Result<ExitCode> {
    let suggester = Suggest::new(build_options(&p)?);
    let candidates = build_candidates(&p)?;
    let result = suggester.query_against(query_text(&p), &candidates);

    if p.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if let Some(pick) = result.autocorrect {
            println!("autocorrect: {pick}");
        }
        for m in &result.matches {
            println!("{m}");
        }
    }
    Ok(found(result.success()))
}

pub fn autocorrect(p: Params) -> Result<ExitCode> {
    let suggester = Suggest::new(build_options(&p)?);
    let candidates = build_candidates(&p)?;
    let pick = suggester.autocorrect_against(query_text(&p), &candidates);
    if let Some(pick) = pick {
        println!("{pick}");
    }
    Ok(found(pick.is_some()))
}

pub fn exact(p: Params) -> Result<ExitCode> {
    let candidates = build_candidates(&p)?;
    let hit = suggest::exact_match(query_text(&p), &candidates);
    if let Some(hit) = hit {
        println!("{hit}");
    }
    Ok(found(hit.is_some()))
}

pub fn distance(p: Params) -> Result<ExitCode> {
    let suggester = Suggest::new(build_options(&p)?);
    let candidate = p.candidate.as_deref().unwrap_or_default();
    println!("{}", suggester.calculate_similarity(query_text(&p), candidate));
    Ok(ExitCode::SUCCESS)
}

pub fn match_request(p: Params) -> Result<ExitCode> {
    let mut candidates = build_candidates(&p)?;
    if candidates.is_empty() {
        candidates = api::DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect();
    }
    let suggester = Suggest::new(build_options(&p)?).with_commands(candidates);

    let (status, body) = api::handle_match(&suggester, p.query.as_deref());
    println!("{}", serde_json::to_string(&body)?);
    Ok(match status {
        MatchStatus::Ok => ExitCode::SUCCESS,
        MatchStatus::NotFound => ExitCode::from(NOT_FOUND),
        MatchStatus::BadRequest => ExitCode::from(BAD_REQUEST),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Overrides;
    use std::io::Write;

    #[test]
    fn overrides_apply_on_top_of_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"costdeletion": 10, "similarityminimum": 3}}"#).unwrap();

        let p = Params {
            config: Some(file.path().to_path_buf()),
            overrides: Overrides {
                similarity_minimum: Some(9),
                ..Overrides::default()
            },
            no_autocorrect: true,
            ..Params::default()
        };
        let options = build_options(&p).unwrap();
        assert_eq!(options.cost_deletion, 10);
        assert_eq!(options.similarity_minimum, 9);
        assert!(options.autocorrect_disabled);
    }

    #[test]
    fn zero_override_resets_config_swap() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"costswap": 3, "costinsertion": 2}}"#).unwrap();

        let p = Params {
            config: Some(file.path().to_path_buf()),
            overrides: Overrides {
                cost_swap: Some(0),
                ..Overrides::default()
            },
            ..Params::default()
        };
        let options = build_options(&p).unwrap();
        assert_eq!(options.cost_swap, 0);
        assert_eq!(options.cost_insertion, 2);

        let suggester = Suggest::new(options);
        assert_eq!(suggester.calculate_similarity("fgrep", "fgerp"), 0);
    }

    #[test]
    fn missing_config_is_reported() {
        let p = Params {
            config: Some("/no/such/options.json".into()),
            ..Params::default()
        };
        let err = build_options(&p).unwrap_err();
        assert!(format!("{err:#}").contains("loading options from /no/such/options.json"));
    }

    #[test]
    fn candidates_merge_args_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stash\n# comment\nstatus").unwrap();

        let p = Params {
            candidates: vec!["commit".to_owned()],
            candidates_file: Some(file.path().to_path_buf()),
            ..Params::default()
        };
        assert_eq!(
            build_candidates(&p).unwrap(),
            vec!["commit", "stash", "status"]
        );
    }
}
