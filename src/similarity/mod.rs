//! Weighted edit distance and candidate ranking.
//!
//! The distance engine ([`distance::distance`]) scores one query/candidate
//! pair; the ranker ([`rank::rank`]) scores a whole candidate list, filters it
//! by the similarity threshold and picks an autocorrect suggestion. Both take
//! options already resolved by [`Options::resolve`].

pub mod distance;
mod options;
pub mod rank;

pub use distance::distance;
pub use options::{
    Costs, Options, ResolvedOptions, DEFAULT_COST_DELETION, DEFAULT_COST_INSERTION,
    DEFAULT_COST_SUBSTITUTION, DEFAULT_COST_SWAP, DEFAULT_SIMILARITY_MINIMUM,
};
pub use rank::{exact_match, rank, score, QueryResult, Score};
