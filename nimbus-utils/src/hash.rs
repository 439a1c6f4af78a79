// Copyright (c) Microsoft. All rights reserved.

//! Structural fingerprints for API model objects.
//!
//! Model equality is structural, so any model used as a map or set key needs
//! a hash that agrees with it across processes and SDK ports. The fingerprint
//! folds fields with the `hash = 31 * hash + field` rule, seeded with 1, and
//! every scalar hashes by a fixed per-type rule below. An unset field always
//! contributes 0. All arithmetic wraps on 32 bits.

use chrono::{DateTime, Utc};

/// Fingerprint of boolean `true`.
const TRUE_HASH: i32 = 1231;
/// Fingerprint of boolean `false`.
const FALSE_HASH: i32 = 1237;

/// A 32-bit structural fingerprint, stable across releases and platforms.
pub trait StableHash {
    fn stable_hash(&self) -> i32;
}

/// Folds the fields of one model object, in declaration order, into its
/// fingerprint.
pub fn hash_fields(fields: &[&dyn StableHash]) -> i32 {
    fields.iter().fold(1_i32, |hash, field| {
        hash.wrapping_mul(31).wrapping_add(field.stable_hash())
    })
}

impl StableHash for bool {
    fn stable_hash(&self) -> i32 {
        if *self {
            TRUE_HASH
        } else {
            FALSE_HASH
        }
    }
}

impl StableHash for i32 {
    fn stable_hash(&self) -> i32 {
        *self
    }
}

impl StableHash for i64 {
    fn stable_hash(&self) -> i32 {
        fold_wide(*self)
    }
}

impl StableHash for str {
    /// Folds the UTF-16 code units of the string, seeded with 0. Both
    /// surrogate halves of a supplementary character contribute.
    fn stable_hash(&self) -> i32 {
        self.encode_utf16().fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
    }
}

impl StableHash for String {
    fn stable_hash(&self) -> i32 {
        self.as_str().stable_hash()
    }
}

impl StableHash for DateTime<Utc> {
    /// Timestamps hash by their millisecond instant; two representations of
    /// the same instant fingerprint identically.
    fn stable_hash(&self) -> i32 {
        fold_wide(self.timestamp_millis())
    }
}

impl<T> StableHash for Vec<T>
where
    T: StableHash,
{
    fn stable_hash(&self) -> i32 {
        self.iter().fold(1_i32, |hash, item| {
            hash.wrapping_mul(31).wrapping_add(item.stable_hash())
        })
    }
}

impl<T> StableHash for Option<T>
where
    T: StableHash,
{
    fn stable_hash(&self) -> i32 {
        self.as_ref().map_or(0, StableHash::stable_hash)
    }
}

/// Collapses a 64-bit value to 32 bits by xor-ing its halves and keeping the
/// low word.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn fold_wide(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as u32 as i32
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{hash_fields, StableHash};

    #[test_case("", 0; "empty")]
    #[test_case("a", 97; "single ascii")]
    #[test_case("abc", 96354; "short ascii")]
    #[test_case("é", 233; "latin one unit")]
    #[test_case("𝒜", 1_772_295; "surrogate pair folds both halves")]
    fn string_fingerprints(input: &str, expected: i32) {
        assert_eq!(expected, input.stable_hash());
    }

    #[test]
    fn scalar_fingerprints() {
        assert_eq!(1231, true.stable_hash());
        assert_eq!(1237, false.stable_hash());
        assert_eq!(42, 42_i32.stable_hash());
        assert_eq!(-7, (-7_i32).stable_hash());
        assert_eq!(1, 1_i64.stable_hash());
        assert_eq!(0, (-1_i64).stable_hash());
        assert_eq!(1, (1_i64 << 32).stable_hash());
        assert_eq!(i32::MAX, i64::from(i32::MAX).stable_hash());
    }

    #[test]
    fn timestamp_fingerprints_by_millisecond() {
        let epoch = DateTime::from_timestamp_millis(0).unwrap();
        assert_eq!(0, epoch.stable_hash());

        let one_milli = DateTime::from_timestamp_millis(1).unwrap();
        assert_eq!(1, one_milli.stable_hash());

        let same_instant = DateTime::from_timestamp_millis(1_577_836_800_000).unwrap();
        assert_eq!(
            same_instant.stable_hash(),
            DateTime::from_timestamp_millis(1_577_836_800_000)
                .unwrap()
                .stable_hash()
        );
    }

    #[test]
    fn list_fingerprints() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(1, empty.stable_hash());
        assert_eq!(30817, vec![1_i32, 2, 3].stable_hash());
    }

    #[test]
    fn unset_contributes_zero() {
        assert_eq!(0, None::<String>.stable_hash());
        assert_eq!(96354, Some("abc".to_owned()).stable_hash());

        // seed * 31 + 0, then * 31 + hash("x")
        let unset: Option<String> = None;
        let set = Some("x".to_owned());
        assert_eq!(1081, hash_fields(&[&unset, &set]));
    }

    #[test]
    fn no_fields_hashes_to_seed() {
        assert_eq!(1, hash_fields(&[]));
    }

    proptest! {
        #[test]
        fn list_matches_field_fold(items in proptest::collection::vec(any::<i32>(), 0..16)) {
            let folded = items.iter().fold(1_i32, |hash, item| {
                hash.wrapping_mul(31).wrapping_add(item.stable_hash())
            });
            prop_assert_eq!(folded, items.stable_hash());
        }

        #[test]
        fn some_matches_inner(value in any::<i64>()) {
            prop_assert_eq!(value.stable_hash(), Some(value).stable_hash());
        }
    }
}
