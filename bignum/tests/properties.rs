//! Property-based tests for the arithmetic engine.
//!
//! Every operation is checked against `num-bigint` reduced modulo
//! `2^TOTAL_BITS`, over operands of random bit length so that small,
//! word-boundary and full-width values all get exercised.

use std::cmp::Ordering;

use bignum::{BigNum, Word, TOTAL_BITS, WORDS};
use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::{One, Zero};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn to_big(n: &BigNum) -> BigUint {
    BigUint::parse_bytes(n.to_hex_string().as_bytes(), 16).unwrap()
}

fn from_big(x: &BigUint) -> BigNum {
    BigNum::from_hex_str(&x.to_str_radix(16)).unwrap()
}

fn modulus() -> BigUint {
    BigUint::one() << TOTAL_BITS
}

/// Strategy: random words truncated to a random bit length.
fn any_bignum() -> impl Strategy<Value = BigNum> {
    (prop::collection::vec(any::<Word>(), WORDS), 0..=TOTAL_BITS).prop_map(|(words, keep)| {
        let mut arr = [0; WORDS];
        arr.copy_from_slice(&words);
        let mut out = BigNum::new();
        BigNum::from_words(arr).rshift(&mut out, TOTAL_BITS - keep);
        out
    })
}

/// Strategy: values strictly below `2^(TOTAL_BITS / 2)`.
fn half_width() -> impl Strategy<Value = BigNum> {
    any_bignum().prop_map(|n| {
        let mut out = BigNum::new();
        n.rshift(&mut out, TOTAL_BITS / 2);
        out
    })
}

// ============================================================================
// Comparator
// ============================================================================

proptest! {
    #[test]
    fn compare_matches_oracle(a in any_bignum(), b in any_bignum()) {
        prop_assert_eq!(a.compare(&b), to_big(&a).cmp(&to_big(&b)));
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
        prop_assert_eq!(a.is_zero(), to_big(&a).is_zero());
    }
}

// ============================================================================
// Additive family
// ============================================================================

proptest! {
    #[test]
    fn add_matches_oracle(a in any_bignum(), b in any_bignum()) {
        let (mut ab, mut ba) = (BigNum::new(), BigNum::new());
        a.add(&b, &mut ab);
        b.add(&a, &mut ba);
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(to_big(&ab), (to_big(&a) + to_big(&b)) % modulus());
    }

    #[test]
    fn add_zero_is_identity(a in any_bignum()) {
        let mut c = BigNum::new();
        a.add(&BigNum::ZERO, &mut c);
        prop_assert_eq!(c, a);
    }

    #[test]
    fn sub_then_add_roundtrips(a in any_bignum(), b in any_bignum()) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let (mut diff, mut back) = (BigNum::new(), BigNum::new());
        hi.checked_sub(&lo, &mut diff).unwrap();
        diff.add(&lo, &mut back);
        prop_assert_eq!(back, hi);
    }

    #[test]
    fn sub_wraps_like_oracle(a in any_bignum(), b in any_bignum()) {
        let mut c = BigNum::new();
        let borrowed = a.overflowing_sub(&b, &mut c);
        prop_assert_eq!(borrowed, a < b);
        let expected = (to_big(&a) + modulus() - to_big(&b)) % modulus();
        prop_assert_eq!(to_big(&c), expected);
    }

    #[test]
    fn inc_dec_are_inverse(a in any_bignum()) {
        let mut x = a;
        x.inc();
        let mut expected = BigNum::new();
        a.add(&BigNum::ONE, &mut expected);
        prop_assert_eq!(x, expected);
        x.dec();
        prop_assert_eq!(x, a);
    }
}

// ============================================================================
// Bitwise family
// ============================================================================

proptest! {
    #[test]
    fn logic_matches_oracle(a in any_bignum(), b in any_bignum()) {
        let (mut and, mut or, mut xor) = (BigNum::new(), BigNum::new(), BigNum::new());
        a.and(&b, &mut and);
        a.or(&b, &mut or);
        a.xor(&b, &mut xor);
        prop_assert_eq!(to_big(&and), to_big(&a) & to_big(&b));
        prop_assert_eq!(to_big(&or), to_big(&a) | to_big(&b));
        prop_assert_eq!(to_big(&xor), to_big(&a) ^ to_big(&b));

        let mut swapped = BigNum::new();
        b.xor(&a, &mut swapped);
        prop_assert_eq!(swapped, xor);
    }

    #[test]
    fn shifts_match_oracle(a in any_bignum(), nbits in 0..TOTAL_BITS + 16) {
        let (mut l, mut r) = (BigNum::new(), BigNum::new());
        a.lshift(&mut l, nbits);
        a.rshift(&mut r, nbits);
        prop_assert_eq!(to_big(&l), (to_big(&a) << nbits) % modulus());
        prop_assert_eq!(to_big(&r), to_big(&a) >> nbits);
    }
}

// ============================================================================
// Multiplicative family
// ============================================================================

proptest! {
    #[test]
    fn mul_matches_oracle(a in any_bignum(), b in any_bignum()) {
        let (mut ab, mut ba) = (BigNum::new(), BigNum::new());
        a.mul(&b, &mut ab);
        b.mul(&a, &mut ba);
        prop_assert_eq!(ab, ba);
        let full = to_big(&a) * to_big(&b);
        prop_assert_eq!(to_big(&ab), &full % modulus());

        let mut checked = BigNum::new();
        prop_assert_eq!(a.checked_mul(&b, &mut checked).is_ok(), full < modulus());
    }

    #[test]
    fn mul_identities(a in any_bignum()) {
        let mut c = BigNum::new();
        a.mul(&BigNum::ONE, &mut c);
        prop_assert_eq!(c, a);
        a.mul(&BigNum::ZERO, &mut c);
        prop_assert!(c.is_zero());
    }

    #[test]
    fn divmod_matches_oracle(a in any_bignum(), b in any_bignum()) {
        prop_assume!(!b.is_zero());
        let (mut q, mut r) = (BigNum::new(), BigNum::new());
        a.divmod(&b, &mut q, &mut r).unwrap();
        prop_assert_eq!(to_big(&q), to_big(&a) / to_big(&b));
        prop_assert_eq!(to_big(&r), to_big(&a) % to_big(&b));
        prop_assert!(r < b);

        // q * b + r == a
        let (mut qb, mut back) = (BigNum::new(), BigNum::new());
        q.mul(&b, &mut qb);
        qb.add(&r, &mut back);
        prop_assert_eq!(back, a);
    }

    #[test]
    fn division_by_zero_always_errors(a in any_bignum()) {
        let (mut q, mut r) = (BigNum::new(), BigNum::new());
        prop_assert!(a.divmod(&BigNum::ZERO, &mut q, &mut r).is_err());
        prop_assert!(a.modulo(&BigNum::ZERO, &mut r).is_err());
    }
}

// ============================================================================
// Advanced operations
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pow_matches_oracle(a in any_bignum(), e in 0u64..200) {
        let mut c = BigNum::new();
        a.pow(&BigNum::from_u64(e), &mut c);
        prop_assert_eq!(to_big(&c), to_big(&a).modpow(&BigUint::from(e), &modulus()));
    }

    #[test]
    fn pow_mod_matches_oracle(a in any_bignum(), e in any_bignum(), m in half_width()) {
        prop_assume!(!m.is_zero());
        let mut c = BigNum::new();
        a.pow_mod(&e, &m, &mut c).unwrap();
        prop_assert_eq!(to_big(&c), to_big(&a).modpow(&to_big(&e), &to_big(&m)));
    }

    #[test]
    fn isqrt_is_floor_root(a in any_bignum()) {
        let mut root = BigNum::new();
        a.isqrt(&mut root);
        prop_assert_eq!(to_big(&root), Roots::sqrt(&to_big(&a)));

        let r = to_big(&root);
        prop_assert!(&r * &r <= to_big(&a));
        prop_assert!((&r + 1u32) * (&r + 1u32) > to_big(&a));
    }
}

// ============================================================================
// Conversion layer
// ============================================================================

proptest! {
    #[test]
    fn hex_roundtrip(a in any_bignum()) {
        let hex = a.to_hex_string();
        prop_assert_eq!(&hex, &to_big(&a).to_str_radix(16));
        prop_assert_eq!(BigNum::from_hex_str(&hex).unwrap(), a);
    }

    #[test]
    fn decimal_matches_oracle(a in any_bignum()) {
        let dec = a.to_string();
        prop_assert_eq!(&dec, &to_big(&a).to_str_radix(10));
        prop_assert_eq!(BigNum::from_decimal_str(&dec).unwrap(), a);
    }

    #[test]
    fn u64_roundtrip(v in any::<u64>()) {
        prop_assert_eq!(BigNum::from_u64(v).to_u64(), v);
        prop_assert_eq!(from_big(&BigUint::from(v)), BigNum::from_u64(v));
    }
}
