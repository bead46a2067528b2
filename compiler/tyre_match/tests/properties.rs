//! Property-based tests for the matcher.
//!
//! Random type trees are interned into a fresh pool and matched against
//! patterns whose outcome is known in advance:
//! 1. A type always matches itself as a literal, with no captures
//! 2. `T` captures the whole type
//! 3. `func(T, T)` matches exactly when both parameters are identical
//! 4. Compiling the same pattern twice gives the same automaton

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tyre_match::Placeholder::T;
use tyre_match::{match_type, Automaton, Bindings, Pattern};
use tyre_types::{ChanDir, Idx, Kind, Pool};

/// A type tree, interned into a pool on demand.
#[derive(Clone, Debug)]
enum Shape {
    Scalar(Kind),
    Pointer(Box<Shape>),
    Slice(Box<Shape>),
    Array(u64, Box<Shape>),
    Chan(ChanDir, Box<Shape>),
    Map(Box<Shape>, Box<Shape>),
    Func(Vec<Shape>, Vec<Shape>),
}

impl Shape {
    fn intern(&self, pool: &mut Pool) -> Idx {
        match self {
            Shape::Scalar(kind) => scalar(*kind),
            Shape::Pointer(elem) => {
                let elem = elem.intern(pool);
                pool.pointer(elem)
            }
            Shape::Slice(elem) => {
                let elem = elem.intern(pool);
                pool.slice(elem)
            }
            Shape::Array(len, elem) => {
                let elem = elem.intern(pool);
                pool.array(*len, elem)
            }
            Shape::Chan(dir, elem) => {
                let elem = elem.intern(pool);
                pool.chan(*dir, elem)
            }
            Shape::Map(key, value) => {
                let key = key.intern(pool);
                let value = value.intern(pool);
                pool.map(key, value)
            }
            Shape::Func(params, results) => {
                let params: Vec<_> = params.iter().map(|p| p.intern(pool)).collect();
                let results: Vec<_> = results.iter().map(|r| r.intern(pool)).collect();
                pool.func(&params, &results)
            }
        }
    }
}

fn scalar(kind: Kind) -> Idx {
    let raw = Kind::SCALARS
        .iter()
        .position(|k| *k == kind)
        .expect("scalar kind");
    Idx::from_raw(u32::try_from(raw).unwrap())
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop::sample::select(Kind::SCALARS.to_vec()).prop_map(Shape::Scalar);
    leaf.prop_recursive(4, 32, 3, |inner| {
        let dir = prop_oneof![
            Just(ChanDir::Recv),
            Just(ChanDir::Send),
            Just(ChanDir::Both)
        ];
        prop_oneof![
            inner.clone().prop_map(|s| Shape::Pointer(Box::new(s))),
            inner.clone().prop_map(|s| Shape::Slice(Box::new(s))),
            (0u64..16, inner.clone()).prop_map(|(n, s)| Shape::Array(n, Box::new(s))),
            (dir, inner.clone()).prop_map(|(d, s)| Shape::Chan(d, Box::new(s))),
            (inner.clone(), inner.clone())
                .prop_map(|(k, v)| Shape::Map(Box::new(k), Box::new(v))),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner, 0..3)
            )
                .prop_map(|(p, r)| Shape::Func(p, r)),
        ]
    })
}

proptest! {
    #[test]
    fn literal_matches_itself(shape in shape_strategy()) {
        let mut pool = Pool::new();
        let ty = shape.intern(&mut pool);
        let result = match_type(&pool, ty, &Pattern::from(ty)).unwrap();
        prop_assert_eq!(result, Some(Bindings::new()));
    }

    #[test]
    fn placeholder_captures_whole_type(shape in shape_strategy()) {
        let mut pool = Pool::new();
        let ty = shape.intern(&mut pool);
        let result = match_type(&pool, ty, &Pattern::from(T)).unwrap();
        prop_assert_eq!(result.and_then(|b| b.get(T)), Some(ty));
    }

    #[test]
    fn repeated_placeholder_requires_identity(a in shape_strategy(), b in shape_strategy()) {
        let mut pool = Pool::new();
        let a = a.intern(&mut pool);
        let b = b.intern(&mut pool);
        let subject = pool.procedure(&[a, b]);

        let result = match_type(&pool, subject, &Pattern::procedure([T, T])).unwrap();
        prop_assert_eq!(result.is_some(), a == b);
    }

    #[test]
    fn any_sequence_matches_star(shapes in prop::collection::vec(shape_strategy(), 0..6)) {
        let mut pool = Pool::new();
        let params: Vec<_> = shapes.iter().map(|s| s.intern(&mut pool)).collect();
        let subject = pool.procedure(&params);

        let pattern = Pattern::procedure([Pattern::zero_or_more(Pattern::Any)]);
        prop_assert!(match_type(&pool, subject, &pattern).unwrap().is_some());
    }

    #[test]
    fn compilation_is_deterministic(shape in shape_strategy()) {
        let mut pool = Pool::new();
        let ty = shape.intern(&mut pool);
        let pattern = Pattern::func([Pattern::zero_or_one(ty), Pattern::from(T)], [ty]);
        let first = Automaton::compile(&pool, &pattern).unwrap();
        let second = Automaton::compile(&pool, &pattern).unwrap();
        prop_assert_eq!(first, second);
    }
}
