use super::*;

#[test]
fn kind_values_in_expected_ranges() {
    // Scalars: 1-17
    for kind in Kind::SCALARS {
        assert!((1..=17).contains(&(kind as u8)), "{kind} out of range");
    }

    // Nominal: 32-33
    assert!((32..48).contains(&(Kind::Struct as u8)));
    assert!((32..48).contains(&(Kind::Interface as u8)));

    // Composite: 48+
    assert!((Kind::Pointer as u8) >= 48);
    assert!((Kind::Chan as u8) >= 48);
}

#[test]
fn is_composite_is_correct() {
    assert!(Kind::Pointer.is_composite());
    assert!(Kind::Map.is_composite());
    assert!(Kind::Func.is_composite());
    assert!(Kind::Chan.is_composite());

    // Structs and interfaces are matched by identity, never decomposed
    assert!(!Kind::Struct.is_composite());
    assert!(!Kind::Interface.is_composite());
    assert!(!Kind::Int.is_composite());
}

#[test]
fn scalar_table_matches_idx_names() {
    for (raw, kind) in (0u32..).zip(Kind::SCALARS) {
        assert_eq!(Idx::from_raw(raw).name(), Some(kind.name()));
    }
}

#[test]
fn chan_dir_display() {
    assert_eq!(ChanDir::Recv.to_string(), "<-chan");
    assert_eq!(ChanDir::Send.to_string(), "chan<-");
    assert_eq!(ChanDir::Both.to_string(), "chan");
    assert_eq!(ChanDir::Both.prefix(), "chan ");
}
