//! Comparison against previously used passwords.

use crate::distance::levenshtein;
use crate::error::{ValidationFailure, ValidationResult};
use password_policy_common::PolicyConfig;

/// Validate a candidate against its newest-first history.
///
/// An absent or empty history passes. Otherwise the candidate must be at
/// least `min_edit_distance_from_last` edits away from the most recent
/// password, and must not equal any of the first `history_depth` entries.
pub fn validate_history(
    password: &str,
    history: Option<&[String]>,
    policy: &PolicyConfig,
) -> ValidationResult<()> {
    let Some(history) = history.filter(|entries| !entries.is_empty()) else {
        return Ok(());
    };

    let distance = levenshtein(password, &history[0]);
    if distance < policy.min_edit_distance_from_last {
        tracing::debug!(
            distance,
            required = policy.min_edit_distance_from_last,
            "candidate too close to the previous password"
        );
        return Err(ValidationFailure::InsufficientChangeFromLast {
            required_distance: policy.min_edit_distance_from_last,
        });
    }

    if history
        .iter()
        .take(policy.history_depth)
        .any(|previous| previous == password)
    {
        return Err(ValidationFailure::RecentlyReused {
            history_depth: policy.history_depth,
        });
    }

    Ok(())
}
