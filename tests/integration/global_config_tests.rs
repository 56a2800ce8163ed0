//! The process-wide configure/validate pair.
//!
//! The global validator can only be installed once per process, so the whole
//! lifecycle lives in a single test.
use crate::test_utils::*;
use password_policy_lib::{
    configure, configure_with, validate, ConfigError, DictionaryTuning, LengthBound, PolicyConfig,
    ValidationFailure, WordListDictionary,
};
use std::sync::Arc;

#[test]
fn test_configure_once_then_validate() {
    // an inconsistent policy is rejected and leaves the slot empty
    let inverted = PolicyConfig {
        min_password_length: 30,
        max_password_length: 20,
        ..PolicyConfig::default()
    };
    assert!(matches!(
        configure(inverted),
        Err(ConfigError::LengthBounds { min: 30, max: 20 })
    ));

    let policy = PolicyConfig {
        min_password_length: 12,
        ..PolicyConfig::default()
    };
    configure_with(
        policy,
        Arc::new(WordListDictionary::from_words(DICTIONARY_WORDS)),
    )
    .unwrap();

    assert!(validate(Some("Abcdefgh12!?"), None).is_ok());
    assert_eq!(
        validate(Some("Abc12!?"), None),
        Err(ValidationFailure::LengthViolation {
            bound: LengthBound::Min,
            threshold: 12
        })
    );
    assert_eq!(validate(None, None), Err(ValidationFailure::NullOrEmptyInput));

    let history = sample_history();
    assert!(validate(Some(FOUR_CHAR_SUCCESS_PW), Some(&history)).is_ok());

    // reconfiguration is out of contract
    assert!(matches!(
        configure(PolicyConfig::default()),
        Err(ConfigError::AlreadyConfigured)
    ));

    // a rejected reconfiguration leaves the supplied dictionary untuned
    let spare = Arc::new(WordListDictionary::from_words(DICTIONARY_WORDS));
    let loose = PolicyConfig {
        dictionary_accuracy: 0.5,
        dictionary_min_word_length: 6,
        ..PolicyConfig::default()
    };
    assert!(matches!(
        configure_with(loose, spare.clone()),
        Err(ConfigError::AlreadyConfigured)
    ));
    assert_eq!(spare.tuning(), DictionaryTuning::default());

    // concurrent readers share the installed policy
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| validate(Some("Abcdefgh12!?"), None)))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
