//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use serde_json::json;

use domain_customer::RawRecord;

use crate::fixtures::RecordFixtures;

/// Strategy for generating single name tokens such as "Blumenfeld" or "Schulz-Mueller"
pub fn name_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,10}",
        "[A-Z][a-z]{2,6}-[A-Z][a-z]{2,6}",
    ]
}

/// Strategy for generating whitespace-separated full names of 1 to 4 tokens
pub fn name_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(name_token_strategy(), 1..=4)
}

/// Strategy for generating contact strings, possibly padded with whitespace
pub fn contact_strategy() -> impl Strategy<Value = String> {
    (
        "[ ]{0,2}",
        prop_oneof![
            "[a-z]{3,8}[0-9]{0,3}@(gmx|yahoo)\\.de",
            "\\(0[0-9]{2}\\) [0-9]{4}-[0-9]{5}",
        ],
        "[ ]{0,2}",
    )
        .prop_map(|(lead, contact, trail)| format!("{}{}{}", lead, contact, trail))
}

/// Strategy for generating valid create records without an id
pub fn create_record_strategy() -> impl Strategy<Value = RawRecord> {
    (name_token_strategy(), name_token_strategy(), contact_strategy()).prop_map(
        |(first, last, contact)| {
            RecordFixtures::raw(json!({ "first": first, "name": last, "contacts": contact }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn name_tokens_have_no_whitespace(tokens in name_tokens_strategy()) {
            prop_assert!(tokens.iter().all(|t| !t.contains(char::is_whitespace)));
        }

        #[test]
        fn contacts_are_never_blank(contact in contact_strategy()) {
            prop_assert!(!contact.trim().is_empty());
        }

        #[test]
        fn create_records_have_names(record in create_record_strategy()) {
            prop_assert!(record.contains_key("first"));
            prop_assert!(record.contains_key("name"));
        }
    }
}
