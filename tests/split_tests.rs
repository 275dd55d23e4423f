//! Integration tests for split detection

use pinfall::core::{analyze_split_from_pins, is_split, lookup_split, split_catalog, Session};
use pinfall::types::{PinSet, SplitDifficulty};

fn leaving(standing: &[u8]) -> PinSet {
    PinSet::from_pins(standing.iter().copied()).complement()
}

#[test]
fn test_seven_ten() {
    let info = analyze_split_from_pins(leaving(&[7, 10])).unwrap();
    assert_eq!(info.name, "7-10 split");
    assert_eq!(info.difficulty, SplitDifficulty::Extreme);
}

#[test]
fn test_named_leaves() {
    for (standing, name) in [
        (&[4, 6, 7, 10][..], "Big Four"),
        (&[5, 7, 10][..], "Lily"),
        (&[5, 10][..], "Woolworth"),
        (&[3, 10][..], "Baby split"),
        (&[2, 7, 10][..], "Christmas Tree"),
    ] {
        let info = analyze_split_from_pins(leaving(standing)).unwrap();
        assert_eq!(info.name, name);
        assert_eq!(info.pins, standing);
    }
}

#[test]
fn test_non_splits() {
    // Head pin up.
    assert!(analyze_split_from_pins(leaving(&[1, 7])).is_none());
    // Single pin.
    assert!(analyze_split_from_pins(leaving(&[7])).is_none());
    // Touching pins.
    assert!(analyze_split_from_pins(leaving(&[6, 9, 10])).is_none());
    // Strike.
    assert!(analyze_split_from_pins(PinSet::full_rack()).is_none());
}

#[test]
fn test_catalog_is_an_allow_list() {
    let standing = PinSet::from_pins([2, 8, 10]);
    assert!(is_split(standing));
    assert!(lookup_split(standing).is_none());
    assert!(analyze_split_from_pins(standing.complement()).is_none());
    assert!(split_catalog().len() >= 20);
}

#[test]
fn test_second_ball_does_not_replace_advisory() {
    let mut session = Session::new();
    let outcome = session.confirm_throw(leaving(&[4, 6])).unwrap();
    assert_eq!(outcome.split.unwrap().name, "4-6 split");

    let outcome = session.confirm_throw(PinSet::from_pins([4, 6])).unwrap();
    assert!(outcome.split.is_none());
    // Frame closed, advisory dismissed.
    assert!(session.split_advisory().is_none());
}
