//! Word-list dictionary behaviour through the public API
use password_policy_lib::{DictionaryOracle, PasswordValidator, PolicyConfig, ValidationFailure, WordListDictionary};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_validator_configures_dictionary() {
    let dictionary = Arc::new(WordListDictionary::from_words(["monkey"]));
    let policy = PolicyConfig {
        dictionary_accuracy: 0.3,
        dictionary_min_word_length: 5,
        ..PolicyConfig::default()
    };
    PasswordValidator::new(policy, dictionary.clone()).unwrap();

    let tuning = dictionary.tuning();
    assert_eq!(tuning.accuracy, 0.3);
    assert_eq!(tuning.min_word_length, 5);
}

#[test]
fn test_accuracy_controls_partial_matches() {
    // "monkey" covers 6 of 16 characters
    let candidate = "Monkey!Qz7Xw9Rv2";

    let loose = PasswordValidator::new(
        PolicyConfig {
            dictionary_accuracy: 0.3,
            ..PolicyConfig::default()
        },
        Arc::new(WordListDictionary::from_words(["monkey"])),
    )
    .unwrap();
    assert_eq!(
        loose.validate(Some(candidate), None),
        Err(ValidationFailure::DictionaryMatch)
    );

    let strict = PasswordValidator::new(
        PolicyConfig::default(),
        Arc::new(WordListDictionary::from_words(["monkey"])),
    )
    .unwrap();
    assert!(strict.validate(Some(candidate), None).is_ok());
}

#[test]
fn test_word_list_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "# common passwords\nletmein\nwelcome\n").unwrap();

    let validator = PasswordValidator::new(
        PolicyConfig::default(),
        Arc::new(WordListDictionary::new(&path)),
    )
    .unwrap();

    assert_eq!(
        validator.validate(Some("W3lcomeLetMe1n!!"), None),
        Err(ValidationFailure::DictionaryMatch)
    );
    assert!(validator.validate(Some("AAAAbbbb1111@@@@"), None).is_ok());
}

#[test]
fn test_missing_word_list() {
    let dir = tempdir().unwrap();
    let validator = PasswordValidator::new(
        PolicyConfig::default(),
        Arc::new(WordListDictionary::new(dir.path().join("absent.txt"))),
    )
    .unwrap();

    let failure = validator
        .validate(Some("AAAAbbbb1111@@@@"), None)
        .unwrap_err();
    assert_eq!(failure.error_code(), "PCV_101");
    assert!(failure.to_string().contains("absent.txt"));

    // structural failures are still reported without touching the dictionary
    assert!(matches!(
        validator.validate(Some("short"), None),
        Err(ValidationFailure::LengthViolation { .. })
    ));
}

#[test]
fn test_rejects_bad_tuning() {
    let dictionary = WordListDictionary::from_words(["word"]);
    assert!(dictionary.configure(1.01, 4).is_err());
    assert!(dictionary.configure(0.5, 0).is_err());
    assert!(dictionary.configure(0.5, 2).is_ok());
}
