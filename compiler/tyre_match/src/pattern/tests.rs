use super::*;
use pretty_assertions::assert_eq;
use crate::Placeholder::{T, U};

#[test]
fn constructors_build_expected_nodes() {
    assert_eq!(Pattern::ty(Idx::INT), Pattern::Type(Idx::INT));
    assert_eq!(
        Pattern::pointer(T),
        Pattern::Pointer(Box::new(Pattern::Placeholder(T)))
    );
    assert_eq!(
        Pattern::map(U, T),
        Pattern::Map {
            key: Box::new(Pattern::Placeholder(U)),
            value: Box::new(Pattern::Placeholder(T)),
        }
    );
    assert_eq!(
        Pattern::procedure([T, U]),
        Pattern::Func {
            params: vec![Pattern::Placeholder(T), Pattern::Placeholder(U)],
            results: vec![],
        }
    );
}

#[test]
fn or_accepts_mixed_alternatives() {
    let p = Pattern::or([Pattern::ty(Idx::INT), Pattern::from(T)]);
    assert_eq!(
        p,
        Pattern::Or(vec![Pattern::Type(Idx::INT), Pattern::Placeholder(T)])
    );
}

#[test]
fn from_conversions() {
    assert_eq!(Pattern::from(Idx::STRING), Pattern::Type(Idx::STRING));
    assert_eq!(Pattern::from(U), Pattern::Placeholder(U));
    assert_eq!(
        Pattern::from(KindFilter::Struct),
        Pattern::KindIs(KindFilter::Struct)
    );
}

#[test]
fn kind_filter_kinds() {
    assert_eq!(KindFilter::Struct.kind(), Kind::Struct);
    assert_eq!(KindFilter::Interface.kind(), Kind::Interface);
}

#[test]
fn display_shapes() {
    assert_eq!(Pattern::pointer(Pattern::slice(Idx::INT)).to_string(), "*[]int");
    assert_eq!(Pattern::map(U, T).to_string(), "map[U]T");
    assert_eq!(Pattern::array(Pattern::Any).to_string(), "[_]_");
    assert_eq!(Pattern::chan(ChanDir::Recv, T).to_string(), "<-chan T");
    assert_eq!(Pattern::func([T], [U]).to_string(), "func(T) U");
    assert_eq!(
        Pattern::func([T, U], [Pattern::from(T), Pattern::ty(Idx::BOOL)]).to_string(),
        "func(T, U) (T, bool)"
    );
}

#[test]
fn display_operators() {
    assert_eq!(
        Pattern::or([Idx::INT, Idx::STRING]).to_string(),
        "(int | string)"
    );
    assert_eq!(Pattern::zero_or_one(T).to_string(), "T?");
    assert_eq!(Pattern::zero_or_more(Pattern::Any).to_string(), "_*");
    assert_eq!(Pattern::one_or_more(U).to_string(), "U+");
    assert_eq!(Pattern::group(T).to_string(), "(T)");
    assert_eq!(Pattern::KindIs(KindFilter::Interface).to_string(), "<interface>");
    assert_eq!(
        Pattern::AssignableTo(Idx::INT).to_string(),
        "assignable_to(int)"
    );
}

#[test]
fn equal_patterns_hash_equal() {
    use std::hash::BuildHasher;

    let build = rustc_hash::FxBuildHasher;
    let a = Pattern::procedure([Pattern::zero_or_one(T), Pattern::from(T)]);
    let b = Pattern::procedure([Pattern::zero_or_one(T), Pattern::from(T)]);
    assert_eq!(a, b);
    assert_eq!(build.hash_one(&a), build.hash_one(&b));
}
