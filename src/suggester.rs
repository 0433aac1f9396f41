//! Command autocorrect facade.
//!
//! [`Suggest`] pairs resolved options with an optional list of known
//! commands, so a caller can ask "did you mean" questions without passing
//! the candidate list every time.
//!
//! ```
//! use suggest::{Options, Suggest};
//!
//! let suggester = Suggest::new(Options::default())
//!     .with_commands(["perfil", "profiel", "profile", "profil", "account"]);
//!
//! let result = suggester.query("proflie");
//! assert_eq!(result.matches, vec!["profile", "profil", "profiel"]);
//! assert_eq!(result.autocorrect, Some("profile"));
//! ```

use crate::similarity::{self, Options, QueryResult, ResolvedOptions};

#[derive(Debug, Clone, Default)]
pub struct Suggest {
    options: ResolvedOptions,
    commands: Vec<String>,
}

impl Suggest {
    pub fn new(options: Options) -> Self {
        Self::from_resolved(options.resolve())
    }

    pub fn from_resolved(options: ResolvedOptions) -> Self {
        Self {
            options,
            commands: Vec::new(),
        }
    }

    /// Replace the default command list used by [`query`](Self::query) and friends.
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn query(&self, query: &str) -> QueryResult<'_> {
        self.query_against(query, self.commands.as_slice())
    }

    pub fn query_against<'a, S: AsRef<str>>(
        &self,
        query: &str,
        commands: &'a [S],
    ) -> QueryResult<'a> {
        similarity::rank(query, commands, &self.options)
    }

    /// Closest command within the threshold, even when autocorrect is disabled
    /// in the options.
    pub fn autocorrect(&self, query: &str) -> Option<&str> {
        self.autocorrect_against(query, self.commands.as_slice())
    }

    pub fn autocorrect_against<'a, S: AsRef<str>>(
        &self,
        query: &str,
        commands: &'a [S],
    ) -> Option<&'a str> {
        let result = similarity::rank(query, commands, &self.options.with_autocorrect());
        if result.success() {
            result.autocorrect
        } else {
            None
        }
    }

    pub fn exact_match(&self, query: &str) -> Option<&str> {
        similarity::exact_match(query, self.commands.as_slice())
    }

    pub fn exact_match_against<'a, S: AsRef<str>>(
        &self,
        query: &str,
        commands: &'a [S],
    ) -> Option<&'a str> {
        similarity::exact_match(query, commands)
    }

    /// Weighted edit distance between `query` and `candidate`.
    pub fn calculate_similarity(&self, query: &str, candidate: &str) -> usize {
        similarity::distance(query, candidate, &self.options.costs)
    }
}
