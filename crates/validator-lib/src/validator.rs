// ============================
// crates/validator-lib/src/validator.rs
// ============================
//! The password validation pipeline.

use crate::config::validate_policy;
use crate::dictionary::DictionaryOracle;
use crate::error::{ConfigError, ValidationFailure, ValidationResult};
use crate::metrics::{VALIDATION_ACCEPTED, VALIDATION_REJECTED};
use crate::validation::{
    validate_characters_and_length, validate_dates, validate_history, validate_phone_numbers,
};
use password_policy_common::PolicyConfig;
use std::sync::Arc;

/// Validates candidate passwords against one fixed policy.
///
/// Cloning is cheap; the policy and dictionary are shared.
#[derive(Clone)]
pub struct PasswordValidator {
    policy: Arc<PolicyConfig>,
    dictionary: Arc<dyn DictionaryOracle>,
}

impl std::fmt::Debug for PasswordValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordValidator")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl PasswordValidator {
    /// Build a validator, checking the policy and passing its dictionary
    /// tuning on to `dictionary`.
    pub fn new(
        policy: PolicyConfig,
        dictionary: Arc<dyn DictionaryOracle>,
    ) -> Result<Self, ConfigError> {
        validate_policy(&policy)?;
        dictionary.configure(policy.dictionary_accuracy, policy.dictionary_min_word_length)?;

        Ok(Self {
            policy: Arc::new(policy),
            dictionary,
        })
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Validate a candidate against the policy and a newest-first history.
    ///
    /// Rules run in a fixed order and the first failure is returned:
    /// presence, length and character classes, dates, phone numbers,
    /// dictionary words, then history.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate(
        &self,
        candidate: Option<&str>,
        history: Option<&[String]>,
    ) -> ValidationResult<()> {
        let outcome = self.run_checks(candidate, history);

        match &outcome {
            Ok(()) => {
                tracing::debug!("password accepted");
                ::metrics::counter!(VALIDATION_ACCEPTED).increment(1);
            },
            Err(failure) => {
                if failure.is_policy_violation() {
                    tracing::warn!(code = failure.error_code(), "password rejected");
                } else {
                    tracing::error!(code = failure.error_code(), error = %failure, "password validation could not complete");
                }
                ::metrics::counter!(VALIDATION_REJECTED, "code" => failure.error_code())
                    .increment(1);
            },
        }

        outcome
    }

    fn run_checks(&self, candidate: Option<&str>, history: Option<&[String]>) -> ValidationResult<()> {
        let password = candidate.ok_or(ValidationFailure::NullOrEmptyInput)?;

        validate_characters_and_length(password, &self.policy)?;
        validate_dates(password, &self.policy)?;
        validate_phone_numbers(password, &self.policy)?;

        if self.policy.restricted_by_dictionary && self.dictionary.is_dictionary_based(password)? {
            return Err(ValidationFailure::DictionaryMatch);
        }

        validate_history(password, history, &self.policy)
    }
}
