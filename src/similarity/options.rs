//! Tunable edit costs and the similarity threshold.
//!
//! [`Options`] is the raw, serde-loadable form in which any non-positive
//! integer stands for "use the default". [`Options::resolve`] turns it into
//! an immutable [`ResolvedOptions`] once, up front; the distance engine and
//! the ranker only ever see the resolved record.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COST_SWAP: usize = 0;
pub const DEFAULT_COST_SUBSTITUTION: usize = 2;
pub const DEFAULT_COST_INSERTION: usize = 1;
pub const DEFAULT_COST_DELETION: usize = 4;
pub const DEFAULT_SIMILARITY_MINIMUM: usize = 6;

/// User-facing options. Integer fields `<= 0` fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Cost of transposing two adjacent characters (default: 0)
    #[serde(rename = "costswap", skip_serializing_if = "is_unset")]
    pub cost_swap: i64,
    /// Cost of replacing one character with another (default: 2)
    #[serde(rename = "costsubstitution", skip_serializing_if = "is_unset")]
    pub cost_substitution: i64,
    /// Cost of inserting a character from the candidate (default: 1)
    #[serde(rename = "costinsertion", skip_serializing_if = "is_unset")]
    pub cost_insertion: i64,
    /// Cost of deleting a character from the query (default: 4)
    #[serde(rename = "costdeletion", skip_serializing_if = "is_unset")]
    pub cost_deletion: i64,
    /// Highest score a candidate may have and still count as a match (default: 6)
    #[serde(rename = "similarityminimum", skip_serializing_if = "is_unset")]
    pub similarity_minimum: i64,
    /// Skip choosing an autocorrect pick; matches are still produced
    #[serde(rename = "autocorrectdisabled", skip_serializing_if = "is_false")]
    pub autocorrect_disabled: bool,
}

fn is_unset(v: &i64) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn or_default(value: i64, default: usize) -> usize {
    if value <= 0 {
        default
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}

impl Options {
    pub fn with_cost_swap(mut self, cost: i64) -> Self {
        self.cost_swap = cost;
        self
    }

    pub fn with_cost_substitution(mut self, cost: i64) -> Self {
        self.cost_substitution = cost;
        self
    }

    pub fn with_cost_insertion(mut self, cost: i64) -> Self {
        self.cost_insertion = cost;
        self
    }

    pub fn with_cost_deletion(mut self, cost: i64) -> Self {
        self.cost_deletion = cost;
        self
    }

    pub fn with_similarity_minimum(mut self, minimum: i64) -> Self {
        self.similarity_minimum = minimum;
        self
    }

    pub fn with_autocorrect_disabled(mut self, disabled: bool) -> Self {
        self.autocorrect_disabled = disabled;
        self
    }

    /// Replace every non-positive field with its default.
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            costs: Costs {
                swap: or_default(self.cost_swap, DEFAULT_COST_SWAP),
                substitution: or_default(self.cost_substitution, DEFAULT_COST_SUBSTITUTION),
                insertion: or_default(self.cost_insertion, DEFAULT_COST_INSERTION),
                deletion: or_default(self.cost_deletion, DEFAULT_COST_DELETION),
            },
            similarity_minimum: or_default(self.similarity_minimum, DEFAULT_SIMILARITY_MINIMUM),
            autocorrect_disabled: self.autocorrect_disabled,
        }
    }
}

/// Per-operation weights consumed by the distance engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Costs {
    pub swap: usize,
    pub substitution: usize,
    pub insertion: usize,
    pub deletion: usize,
}

impl Costs {
    /// All four operations at cost 1 (plain optimal string alignment).
    pub const UNIT: Costs = Costs {
        swap: 1,
        substitution: 1,
        insertion: 1,
        deletion: 1,
    };
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            swap: DEFAULT_COST_SWAP,
            substitution: DEFAULT_COST_SUBSTITUTION,
            insertion: DEFAULT_COST_INSERTION,
            deletion: DEFAULT_COST_DELETION,
        }
    }
}

/// Fully populated, read-only options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub costs: Costs,
    pub similarity_minimum: usize,
    pub autocorrect_disabled: bool,
}

impl ResolvedOptions {
    /// Same options with autocorrect selection switched on.
    pub fn with_autocorrect(self) -> Self {
        Self {
            autocorrect_disabled: false,
            ..self
        }
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Options::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_from_sentinels() {
        let resolved = Options::default().resolve();
        assert_eq!(resolved.costs, Costs::default());
        assert_eq!(resolved.costs.swap, 0);
        assert_eq!(resolved.costs.substitution, 2);
        assert_eq!(resolved.costs.insertion, 1);
        assert_eq!(resolved.costs.deletion, 4);
        assert_eq!(resolved.similarity_minimum, 6);
        assert!(!resolved.autocorrect_disabled);
    }

    #[test]
    fn positive_values_are_kept() {
        let resolved = Options::default().with_cost_deletion(40).resolve();
        assert_eq!(resolved.costs.deletion, 40);
        assert_eq!(resolved.similarity_minimum, DEFAULT_SIMILARITY_MINIMUM);
    }

    #[test]
    fn negative_values_fall_back() {
        let resolved = Options::default()
            .with_cost_deletion(-40)
            .with_similarity_minimum(-1)
            .resolve();
        assert_eq!(resolved.costs.deletion, DEFAULT_COST_DELETION);
        assert_eq!(resolved.similarity_minimum, DEFAULT_SIMILARITY_MINIMUM);
    }

    #[test]
    fn resolving_leaves_options_untouched() {
        let opts = Options::default();
        let _ = opts.resolve();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn with_autocorrect_reenables() {
        let resolved = Options::default()
            .with_autocorrect_disabled(true)
            .resolve();
        assert!(resolved.autocorrect_disabled);
        assert!(!resolved.with_autocorrect().autocorrect_disabled);
    }

    #[test]
    fn json_tags() {
        let json = r#"{"costswap":3,"similarityminimum":10,"autocorrectdisabled":true}"#;
        let opts: Options = serde_json::from_str(json).unwrap();
        assert_eq!(opts.cost_swap, 3);
        assert_eq!(opts.cost_substitution, 0);
        assert_eq!(opts.similarity_minimum, 10);
        assert!(opts.autocorrect_disabled);

        let json = serde_json::to_string(&Options::default().with_cost_insertion(7)).unwrap();
        assert_eq!(json, r#"{"costinsertion":7}"#);
    }
}
