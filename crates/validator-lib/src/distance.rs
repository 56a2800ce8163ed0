//! Levenshtein edit distance.

use crate::error::ValidationFailure;

/// Compute the Levenshtein distance between `s` and `t`.
///
/// Insertions, deletions and substitutions each cost 1. Comparison is on
/// `char`s and case-sensitive. Two rows of `s.len() + 1` cells are kept and
/// swapped after every character of `t`.
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let n = s.len();
    let m = t.chars().count();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    // previous and current cost rows
    let mut p: Vec<usize> = (0..=n).collect();
    let mut d = vec![0usize; n + 1];

    for (j, t_j) in t.chars().enumerate() {
        d[0] = j + 1;
        for i in 1..=n {
            let cost = usize::from(s[i - 1] != t_j);
            d[i] = (d[i - 1] + 1).min(p[i] + 1).min(p[i - 1] + cost);
        }
        std::mem::swap(&mut p, &mut d);
    }

    // the last swap left the newest row in `p`
    p[n]
}

/// Guarded entry point for callers holding possibly absent strings.
pub fn try_levenshtein(s: Option<&str>, t: Option<&str>) -> Result<usize, ValidationFailure> {
    match (s, t) {
        (Some(s), Some(t)) => Ok(levenshtein(s, t)),
        _ => Err(ValidationFailure::InvalidDistanceInput),
    }
}
