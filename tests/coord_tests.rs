use proptest::prelude::*;
use salvo::coord::{all_coordinates, all_keys, multiplier, row_letters};
use salvo::{decode, encode, CoordError, Coordinate};

#[test]
fn encode_uses_size_dependent_multiplier() -> Result<(), CoordError> {
    assert_eq!(multiplier(9), 10);
    assert_eq!(multiplier(10), 100);
    assert_eq!(encode("A1", 10)?, 101);
    assert_eq!(encode("J10", 10)?, 1010);
    assert_eq!(encode("B3", 5)?, 23);
    assert_eq!(encode("E5", 5)?, 55);
    Ok(())
}

#[test]
fn encode_is_case_insensitive_and_trims() -> Result<(), CoordError> {
    assert_eq!(encode("  c7 ", 10)?, encode("C7", 10)?);
    Ok(())
}

#[test]
fn encode_rejects_malformed_labels() {
    for bad in ["", "7C", "A", "12", "A-1", "A1B", "Ä1", "A 1"] {
        assert!(
            matches!(encode(bad, 10), Err(CoordError::InvalidFormat(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn encode_rejects_out_of_range() {
    assert!(matches!(encode("A0", 10), Err(CoordError::OutOfRange { .. })));
    assert!(matches!(encode("A11", 10), Err(CoordError::OutOfRange { .. })));
    assert!(matches!(encode("K1", 10), Err(CoordError::OutOfRange { .. })));
    assert!(matches!(encode("F1", 5), Err(CoordError::OutOfRange { .. })));
    assert!(matches!(
        encode("A999999999", 10),
        Err(CoordError::OutOfRange { row: 1, col: 999_999_999, .. })
    ));
}

#[test]
fn encode_reports_unrepresentable_labels() {
    assert_eq!(
        encode("A99999999999999", 10),
        Err(CoordError::Overflow("A99999999999999".into()))
    );
    assert_eq!(
        encode("AAAAAAAAAAAAAAAAAAAA1", 10),
        Err(CoordError::Overflow("AAAAAAAAAAAAAAAAAAAA1".into()))
    );
}

#[test]
fn decode_rejects_keys_from_other_boards() {
    assert!(decode(0, 10).is_err());
    assert!(decode(100, 10).is_err());
    assert!(decode(1111, 10).is_err());
}

#[test]
fn row_letters_are_bijective_base26() {
    assert_eq!(row_letters(1), "A");
    assert_eq!(row_letters(26), "Z");
    assert_eq!(row_letters(27), "AA");
    assert_eq!(row_letters(52), "AZ");
    assert_eq!(row_letters(53), "BA");
}

#[test]
fn all_keys_are_ascending_and_complete() {
    for size in [5u8, 9, 10, 20] {
        let keys = all_keys(size);
        assert_eq!(keys.len(), size as usize * size as usize);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all_coordinates(size).len(), keys.len());
    }
}

#[test]
fn offset_stays_on_board() -> Result<(), CoordError> {
    let corner = Coordinate::new(1, 1, 5)?;
    assert_eq!(corner.offset(-1, 0, 5), None);
    assert_eq!(corner.offset(0, -1, 5), None);
    assert_eq!(corner.offset(1, 0, 5), Some(Coordinate::new(2, 1, 5)?));
    let far = Coordinate::new(5, 5, 5)?;
    assert_eq!(far.offset(0, 1, 5), None);
    Ok(())
}

proptest! {
    #[test]
    fn key_roundtrip(size in 5u8..=20, r in 1u8..=20, c in 1u8..=20) {
        prop_assume!(r <= size && c <= size);
        let coord = Coordinate::new(r, c, size).unwrap();
        let label = coord.label();
        let key = encode(&label, size).unwrap();
        prop_assert_eq!(decode(key, size).unwrap(), label);
        prop_assert_eq!(Coordinate::from_key(key, size).unwrap(), coord);
    }

    #[test]
    fn keys_are_unique_per_board(size in 5u8..=20) {
        let mut keys = all_keys(size);
        keys.dedup();
        prop_assert_eq!(keys.len(), size as usize * size as usize);
    }
}
