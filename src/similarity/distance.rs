//! Weighted optimal string alignment distance.
//!
//! A Damerau-Levenshtein variant where swap, substitution, insertion and
//! deletion each carry their own cost. Insertion and deletion are not
//! interchangeable, so `distance(a, b)` and `distance(b, a)` may differ.
//! Strings are compared byte by byte.

use super::options::Costs;

/// Cost of turning `query` into `candidate` under `costs`.
///
/// Uses three rolling rows, so memory is `O(|candidate|)`. Arithmetic
/// saturates at `usize::MAX` rather than overflowing on huge costs.
pub fn distance(query: &str, candidate: &str, costs: &Costs) -> usize {
    let q = query.as_bytes();
    let c = candidate.as_bytes();
    let n = c.len();

    // Row i-2, row i-1, row i
    let mut prev2_row = vec![0usize; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).map(|j| j.saturating_mul(costs.insertion)).collect();
    let mut curr_row = vec![0usize; n + 1];

    for i in 1..=q.len() {
        curr_row[0] = i.saturating_mul(costs.deletion);

        for j in 1..=n {
            let mut cell = prev_row[j - 1];
            if q[i - 1] != c[j - 1] {
                cell = cell.saturating_add(costs.substitution);
            }

            if i > 1 && j > 1 && q[i - 2] == c[j - 1] && q[i - 1] == c[j - 2] {
                cell = cell.min(prev2_row[j - 2].saturating_add(costs.swap));
            }

            cell = cell
                .min(prev_row[j].saturating_add(costs.deletion))
                .min(curr_row[j - 1].saturating_add(costs.insertion));

            curr_row[j] = cell;
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(a: &str, b: &str) -> usize {
        distance(a, b, &Costs::default())
    }

    #[test]
    fn default_cost_calibration() {
        assert_eq!(d("", ""), 0);
        assert_eq!(d("", "a"), 1);
        assert_eq!(d("fgrep", "fgerp"), 0); // swap
        assert_eq!(d("fgrep", "fgerps"), 1); // insertion
        assert_eq!(d("fgrep", "fgre"), 4); // deletion
        assert_eq!(d("fgrep", "fgreP"), 2); // substitution
        assert_eq!(d("word", "wrdo"), 5);
        assert_eq!(d("kissing", "sitting"), 6);
        assert_eq!(d("two words", "one two three"), 12);
    }

    #[test]
    fn empty_sides_scale_with_costs() {
        assert_eq!(d("", "abc"), 3);
        assert_eq!(d("abc", ""), 12);
    }

    #[test]
    fn asymmetric_costs() {
        assert_eq!(d("ca", "abc"), 5);
        assert_eq!(d("abc", "ca"), 8);
    }

    #[test]
    fn swap_competes_with_substitution() {
        let expensive = Costs {
            swap: 5,
            ..Costs::default()
        };
        // two substitutions are cheaper than one swap at 5
        assert_eq!(distance("ab", "ba", &expensive), 4);

        let cheaper = Costs {
            swap: 3,
            ..Costs::default()
        };
        assert_eq!(distance("ab", "ba", &cheaper), 3);
    }

    #[test]
    fn unit_costs() {
        assert_eq!(distance("kissing", "sitting", &Costs::UNIT), 3);
        assert_eq!(distance("teh", "the", &Costs::UNIT), 1);
        assert_eq!(distance("two words", "one two three", &Costs::UNIT), 8);
    }

    #[test]
    fn huge_costs_saturate() {
        let costs = Costs {
            deletion: usize::MAX,
            ..Costs::default()
        };
        assert_eq!(distance("abc", "ab", &costs), usize::MAX);
        assert_eq!(distance("abc", "abcd", &costs), 1);
        assert_eq!(distance("abc", "abd", &costs), 2);

        let all_max = Costs {
            swap: usize::MAX,
            substitution: usize::MAX,
            insertion: usize::MAX,
            deletion: usize::MAX,
        };
        assert_eq!(distance("", "abc", &all_max), usize::MAX);
        assert_eq!(distance("abc", "abc", &all_max), 0);
    }
}
