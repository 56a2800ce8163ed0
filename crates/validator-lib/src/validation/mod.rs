// ============================
// crates/validator-lib/src/validation/mod.rs
// ============================
//! Individual password rules. Each rule returns on its first violation;
//! [`crate::validator::PasswordValidator`] chains them in a fixed order.

pub mod classifier;
pub mod history;
pub mod patterns;

pub use classifier::{classify, validate_characters_and_length, CharKind, ClassCounts};
pub use history::validate_history;
pub use patterns::{contains_date, contains_phone_number, validate_dates, validate_phone_numbers};
