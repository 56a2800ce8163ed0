// ==============
// crates/validator-lib/src/metrics.rs

//! Central place for metric keys
pub const VALIDATION_ACCEPTED: &str = "password.validation.accepted";
pub const VALIDATION_REJECTED: &str = "password.validation.rejected";
pub const DICTIONARY_LOADED: &str = "password.dictionary.loaded";
