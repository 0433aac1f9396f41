//! Ranking candidates against a query.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use super::distance::distance;
use super::options::{Costs, ResolvedOptions};

/// How close a candidate is to the query. Lower is better.
///
/// Variant order is the ranking order: an exact match beats a
/// case-insensitive match, which beats any edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Score {
    Exact,
    CaseInsensitive,
    Distance(usize),
}

impl Score {
    /// Whether this score clears the similarity threshold.
    pub fn within(self, similarity_minimum: usize) -> bool {
        match self {
            Score::Distance(d) => d <= similarity_minimum,
            Score::Exact | Score::CaseInsensitive => true,
        }
    }

    /// Integer form: `-2` exact, `-1` case-insensitive, otherwise the distance.
    pub fn value(self) -> i64 {
        match self {
            Score::Exact => -2,
            Score::CaseInsensitive => -1,
            Score::Distance(d) => i64::try_from(d).unwrap_or(i64::MAX),
        }
    }
}

/// Outcome of ranking a query against a candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    /// Best single match, unless autocorrect is disabled or nothing matched
    pub autocorrect: Option<&'a str>,
    /// Every candidate within the threshold, best first
    pub matches: Vec<&'a str>,
}

impl QueryResult<'_> {
    pub fn success(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Score a single candidate, applying the exact-match overrides.
pub fn score(query: &str, candidate: &str, costs: &Costs) -> Score {
    if query == candidate {
        return Score::Exact;
    }
    if query.to_lowercase() == candidate.to_lowercase() {
        return Score::CaseInsensitive;
    }
    Score::Distance(distance(query, candidate, costs))
}

/// Rank `candidates` against `query`.
///
/// Matches are ordered by ascending score; candidates with equal scores keep
/// their input order. A candidate string listed more than once is reported
/// once. The autocorrect pick is the first candidate in input order holding
/// the lowest score.
pub fn rank<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
    options: &ResolvedOptions,
) -> QueryResult<'a> {
    let scores: Vec<Score> = candidates
        .iter()
        .map(|cand| {
            let s = score(query, cand.as_ref(), &options.costs);
            trace!(query, candidate = cand.as_ref(), score = s.value(), "scored");
            s
        })
        .collect();

    let mut accepted: Vec<(Score, &'a str)> = candidates
        .iter()
        .zip(&scores)
        .filter(|(_, s)| s.within(options.similarity_minimum))
        .map(|(cand, s)| (*s, cand.as_ref()))
        .collect();

    if accepted.is_empty() {
        debug!(
            query,
            candidates = candidates.len(),
            threshold = options.similarity_minimum,
            "no candidate within threshold"
        );
        return QueryResult::default();
    }

    let autocorrect = if options.autocorrect_disabled {
        None
    } else {
        scores.iter().min().and_then(|best| {
            scores
                .iter()
                .position(|s| s == best)
                .map(|i| candidates[i].as_ref())
        })
    };

    // stable: ties stay in input order
    accepted.sort_by_key(|(s, _)| *s);
    let mut seen = HashSet::with_capacity(accepted.len());
    let matches: Vec<&'a str> = accepted
        .into_iter()
        .filter(|(_, cand)| seen.insert(*cand))
        .map(|(_, cand)| cand)
        .collect();

    debug!(
        query,
        matches = matches.len(),
        autocorrect = autocorrect.unwrap_or_default(),
        "ranked candidates"
    );

    QueryResult {
        autocorrect,
        matches,
    }
}

/// First candidate equal to `query` ignoring case, in the candidate's casing.
///
/// Case folding is `str::to_lowercase`, which maps a word-final `Σ` to `ς`,
/// so `"ΟΔΟΣ"` matches `"οδος"` but not `"οδοσ"`.
pub fn exact_match<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Option<&'a str> {
    let wanted = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|cand| cand.to_lowercase() == wanted)
}
