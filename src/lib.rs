//! Weighted edit distance and command autocorrect.
//!
//! Compare a user-entered command against a list of known commands and
//! either autocorrect to a very close match, offer a list of similar
//! entries, or do nothing when nothing is close enough.

pub mod api;
pub mod error;
pub mod loader;
pub mod logging;
pub mod similarity;
mod suggester;

pub use error::{Result, SuggestError};
pub use similarity::{
    distance, exact_match, rank, score, Costs, Options, QueryResult, ResolvedOptions, Score,
};
pub use suggester::Suggest;
