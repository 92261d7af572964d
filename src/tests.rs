//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// A multitude of sets for general-purpose testing.
fn suite() -> Vec<Hset> {
    vec![
        Hset::empty(),
        Hset::new::<(i32, char)>(),
        hset![1],
        hset![1, 'a'],
        hset!['a', F32::from(2.5)],
        hset![F32::from(0.0)],
        hset![1, 2, 3, 'x', String::from("s")],
        hset![hset![1], Hset::empty()],
    ]
}

/// Checks that the zero-kind empty set agrees with an empty set declaring some kinds, on every
/// set from the [`suite`].
macro_rules! test_zero_kind {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = zero_kind_, $name {
                #[test]
                fn fn_name() {
                    let typed = Hset::new::<(i32, char, F32)>();
                    for set in suite() {
                        assert_eq!(
                            Hset::empty().$name(&set),
                            typed.$name(&set),
                            "mismatch against {set:?}"
                        );
                    }
                }
            });
        )*
    };
}

test_zero_kind!(
    intersection,
    union,
    difference,
    symmetric_difference,
    cross_product,
    is_subset,
    is_proper_subset,
    is_superset,
    is_proper_superset,
    is_equivalent
);

#[test]
fn zero_kind_power_set() {
    assert_eq!(Hset::empty().power_set(), Ok(vec![Hset::empty()]));
    assert_eq!(power_set(&Hset::new::<(u8,)>()), Ok(vec![Hset::empty()]));
}

/// The zero-kind empty set overlaps everything, unlike any other empty set.
#[test]
fn zero_kind_overlap() {
    let typed = Hset::new::<(i32, char, F32)>();
    for set in suite() {
        assert!(Hset::empty().is_overlapping(&set));
        assert!(!Hset::empty().is_disjoint(&set));
        assert!(!typed.is_overlapping(&set));
    }
}

#[test]
fn union_laws() {
    for (i, fst) in suite().iter().enumerate() {
        for (j, snd) in suite().iter().enumerate() {
            let union = fst | snd;
            assert_eq!(union, snd | fst, "union must commute at {i}, {j}");
            assert!(fst <= &union && snd <= &union, "union fail at {i}, {j}: {union}");
            assert!(union.size() <= fst.size() + snd.size());
        }
    }
}

#[test]
fn intersection_laws() {
    for (i, fst) in suite().iter().enumerate() {
        for (j, snd) in suite().iter().enumerate() {
            let inter = fst & snd;
            assert_eq!(inter, snd & fst, "intersection must commute at {i}, {j}");
            assert!(
                inter.is_subset(fst) && inter.is_subset(snd),
                "intersection fail at {i}, {j}: {inter}"
            );
            assert_eq!(inter.is_empty(), fst.is_disjoint(snd) || fst.is_zero_kind());
        }
    }
}

#[test]
fn difference_laws() {
    for (i, fst) in suite().iter().enumerate() {
        for (j, snd) in suite().iter().enumerate() {
            let diff = fst - snd;
            assert!(diff.is_subset(fst), "difference fail at {i}, {j}: {diff}");
            assert!(!diff.is_overlapping(snd) || diff.is_zero_kind());

            let sym = fst ^ snd;
            assert_eq!(sym, &(fst - snd) | &(snd - fst), "fail at {i}, {j}");
            assert_eq!(sym, &(fst | snd) - &(fst & snd), "fail at {i}, {j}");
        }
    }
}

#[test]
fn cross_product_len() {
    for fst in suite() {
        for snd in suite() {
            let product = &fst * &snd;
            assert_eq!(product.len(), fst.size() * snd.size());
            for pair in &product {
                assert!(pair.size() == 1 || pair.size() == 2);
                assert!(pair.is_subset(&(&fst | &snd)));
            }
        }
    }
}

#[test]
fn power_set_len() {
    for set in suite() {
        let power_set = set.power_set().unwrap();
        assert_eq!(power_set.len(), 1 << set.size());
        assert!(power_set.contains(&set));
        assert!(power_set.contains(&Hset::empty()));
        for subset in &power_set {
            assert!(subset <= &set);
        }

        // Every subset appears exactly once.
        let nested: Hset = power_set.into_iter().map(Tagged::new).collect();
        assert_eq!(nested.size(), 1 << set.size());
    }
}

#[test]
fn subset_order() {
    for (i, fst) in suite().iter().enumerate() {
        for (j, snd) in suite().iter().enumerate() {
            assert_eq!(fst <= snd && snd <= fst, fst == snd, "fail at {i}, {j}");
            assert_eq!(fst < snd, fst <= snd && fst != snd, "fail at {i}, {j}");
            if !fst.is_zero_kind() && !snd.is_zero_kind() {
                assert_eq!(fst >= snd, snd <= fst, "fail at {i}, {j}");
            }
        }
    }
}

/// The scenarios on `S1 = {1, 'a'}`, `S2 = {'a', 2.5}` and `S3 = {0.0}`.
#[test]
fn scenario() {
    let s1 = hset![1, 'a'];
    let s2 = hset!['a', F32::from(2.5)];
    let s3 = hset![F32::from(0.0)];

    assert_ne!(s1, s2);
    assert_eq!(s1.intersection(&s2), hset!['a']);
    assert!((&s1 & &s3).is_empty());
    assert_eq!(s1.union(&s2), hset![1, 'a', F32::from(2.5)]);
    assert_eq!(s1.difference(&s2), hset![1]);
    assert_eq!(&s1 - &s3, hset![1, 'a']);
    assert_eq!(s1.symmetric_difference(&s2), hset![1, F32::from(2.5)]);
    assert_eq!(s1.cross_product(&s2).len(), 4);
    assert_eq!(power_set(&s1).unwrap().len(), 4);
    assert!(hset![1].is_subset(&s1));
    assert!(!s3.is_subset(&s1));
    assert!(s1.is_disjoint(&s3));
    assert!(s1.is_overlapping(&s2));
    assert!(s3.is_singleton());
    assert!(!s1.is_singleton());

    let empty = Hset::empty();
    assert_eq!(empty.union(&s1), s1);
    assert_eq!(empty.intersection(&s1), empty);
    assert!(empty.is_subset(&s1));
    assert!(empty.is_overlapping(&s1));
}
