// ============================
// crates/validator-lib/src/lib.rs
// ============================
//! Password complexity validation.
//!
//! Build a [`PasswordValidator`] from a [`PolicyConfig`] and a
//! [`DictionaryOracle`], or use the process-wide [`configure`] / [`validate`]
//! pair, which installs a single validator on first use.

pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod validation;
pub mod validator;

pub use crate::config::Settings;
pub use crate::dictionary::{DictionaryOracle, DictionaryTuning, WordListDictionary};
pub use crate::distance::{levenshtein, try_levenshtein};
pub use crate::error::{ConfigError, DictionaryUnavailable, ValidationFailure, ValidationResult};
pub use crate::validator::PasswordValidator;
pub use password_policy_common::{CharClass, LengthBound, PatternKind, PolicyConfig};

use crate::config::DEFAULT_DICTIONARY_PATH;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// The validator behind [`configure`] and [`validate`]
static GLOBAL_VALIDATOR: OnceCell<PasswordValidator> = OnceCell::new();

/// Install the process-wide policy, using the word list at
/// [`DEFAULT_DICTIONARY_PATH`].
///
/// Must run before the first call to [`validate`]; afterwards it returns
/// [`ConfigError::AlreadyConfigured`].
pub fn configure(policy: PolicyConfig) -> Result<(), ConfigError> {
    configure_with(policy, Arc::new(WordListDictionary::new(DEFAULT_DICTIONARY_PATH)))
}

/// Install the process-wide policy with a caller-supplied dictionary.
///
/// `dictionary` is only tuned when the slot is still empty; once a validator
/// is installed this returns [`ConfigError::AlreadyConfigured`] without
/// touching it.
pub fn configure_with(
    policy: PolicyConfig,
    dictionary: Arc<dyn DictionaryOracle>,
) -> Result<(), ConfigError> {
    if GLOBAL_VALIDATOR.get().is_some() {
        return Err(ConfigError::AlreadyConfigured);
    }
    let validator = PasswordValidator::new(policy, dictionary)?;
    GLOBAL_VALIDATOR
        .set(validator)
        .map_err(|_| ConfigError::AlreadyConfigured)?;
    tracing::info!("password policy configured");
    Ok(())
}

/// Validate against the process-wide policy.
///
/// When nothing was configured the default policy is installed first.
pub fn validate(candidate: Option<&str>, history: Option<&[String]>) -> ValidationResult<()> {
    global_validator().validate(candidate, history)
}

fn default_validator() -> Result<PasswordValidator, ConfigError> {
    PasswordValidator::new(
        PolicyConfig::default(),
        Arc::new(WordListDictionary::new(DEFAULT_DICTIONARY_PATH)),
    )
}

fn global_validator() -> &'static PasswordValidator {
    GLOBAL_VALIDATOR.get_or_init(|| {
        tracing::info!("no password policy configured, installing defaults");
        default_validator().expect("default policy satisfies its own invariants")
    })
}
