//! Request glue for a "did you mean" endpoint.
//!
//! [`handle_match`] is transport agnostic: it takes the raw `q` parameter and
//! returns the status and JSON body an HTTP layer would send back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::suggester::Suggest;

/// Commands served when no list is configured.
pub const DEFAULT_COMMANDS: [&str; 3] = ["foo", "bar", "baz"];

pub const MISSING_QUERY_MESSAGE: &str = "Must supply query parameter 'q' in URL.";
pub const NO_MATCH_MESSAGE: &str = "No match was found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Ok,
    BadRequest,
    NotFound,
}

impl MatchStatus {
    pub fn code(self) -> u16 {
        match self {
            MatchStatus::Ok => 200,
            MatchStatus::BadRequest => 400,
            MatchStatus::NotFound => 404,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// True when the match differs from the query as sent
    pub changed: bool,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none", default)]
    pub matched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl MatchResponse {
    fn error(message: &str) -> Self {
        Self {
            error: Some(message.to_owned()),
            ..Self::default()
        }
    }
}

/// Autocorrect `query` against the suggester's commands.
pub fn handle_match(suggester: &Suggest, query: Option<&str>) -> (MatchStatus, MatchResponse) {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => {
            return (
                MatchStatus::BadRequest,
                MatchResponse::error(MISSING_QUERY_MESSAGE),
            )
        }
    };

    match suggester.autocorrect(query) {
        Some(matched) => {
            debug!(query, matched, "match found");
            (
                MatchStatus::Ok,
                MatchResponse {
                    changed: matched != query,
                    matched: Some(matched.to_owned()),
                    error: None,
                },
            )
        }
        None => (MatchStatus::NotFound, MatchResponse::error(NO_MATCH_MESSAGE)),
    }
}
