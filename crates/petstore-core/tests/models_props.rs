// Rust guideline compliant 2026-10-17

//! Property-based tests for models and image naming.

use petstore_core::{parse_pet_id, sanitize_file_name, unique_file_name, Pet, Status};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Available),
        Just(Status::Pending),
        Just(Status::Sold),
    ]
}

fn arb_pet() -> impl Strategy<Value = Pet> {
    (
        1i64..i64::MAX,
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9 ]{0,30}").unwrap(),
        prop::collection::vec(prop::string::string_regex("/images/[a-z]{1,10}\\.png").unwrap(), 0..4),
        arb_status(),
    )
        .prop_map(|(id, name, photo_urls, status)| {
            let mut pet = Pet::new(id, name, status);
            pet.photo_urls = photo_urls;
            pet
        })
}

proptest! {
    #[test]
    fn prop_positive_ids_parse(id in 1i64..i64::MAX) {
        prop_assert_eq!(parse_pet_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn prop_non_positive_ids_rejected(id in i64::MIN..=0i64) {
        prop_assert!(parse_pet_id(&id.to_string()).is_err());
    }

    #[test]
    fn prop_non_numeric_ids_rejected(raw in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
        prop_assert!(parse_pet_id(&raw).is_err());
    }

    #[test]
    fn prop_generated_pets_validate_and_serialize(pet in arb_pet()) {
        prop_assert!(pet.validate().is_ok());
        let line = serde_json::to_string(&pet).unwrap();
        prop_assert!(!line.contains('\n'));
        let decoded: Pet = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(decoded, pet);
    }

    #[test]
    fn prop_sanitized_names_have_no_separators(raw in "[a-z./\\\\]{1,30}") {
        if let Ok(name) = sanitize_file_name(&raw) {
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(name != "." && name != "..");
        }
    }

    #[test]
    fn prop_unique_name_is_free_and_keeps_extension(
        stem in "[a-z]{1,8}",
        ext in "(png|jpg|gif)",
        taken in 0usize..4,
    ) {
        let temp = TempDir::new().unwrap();
        let name = format!("{}.{}", stem, ext);

        let mut occupied = name.clone();
        for _ in 0..taken {
            std::fs::write(temp.path().join(&occupied), b"x").unwrap();
            occupied = unique_file_name(temp.path(), &name);
        }

        let unique = unique_file_name(temp.path(), &name);
        prop_assert!(!temp.path().join(&unique).exists());
        let suffix = format!(".{}", ext);
        prop_assert!(unique.ends_with(&suffix));
        prop_assert_eq!(unique, format!("{}{}.{}", stem, "1".repeat(taken), ext));
    }
}
