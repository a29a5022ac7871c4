//! Property tests for reply parsing.

use marketfit_classifier::parse_sector_reply;
use marketfit_core::Sector;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(Sector::CLASSIFIABLE.to_vec()).prop_map(|s| s.as_str().to_string()),
        Just("general".to_string()),
        "[a-zA-Z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(reply in ".{0,200}", max in 0usize..6) {
        let _ = parse_sector_reply(&reply, max);
    }

    #[test]
    fn parsed_arrays_are_bounded_and_unique(
        labels in proptest::collection::vec(label(), 0..10),
        max in 0usize..6,
    ) {
        let reply = serde_json::to_string(&labels).unwrap();
        let sectors = parse_sector_reply(&reply, max).unwrap();

        prop_assert!(!sectors.is_empty());
        prop_assert!(sectors.len() <= max.max(1));
        for (i, s) in sectors.iter().enumerate() {
            prop_assert!(!sectors[i + 1..].contains(s));
        }
        if sectors.contains(&Sector::General) {
            prop_assert_eq!(sectors.len(), 1);
        }
    }
}
