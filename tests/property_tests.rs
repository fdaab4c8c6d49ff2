//! Property-based tests for the natural-number engine.
//!
//! Uses proptest to verify the arithmetic invariants across randomly
//! generated inputs, with u128 as the ground-truth oracle where the
//! operands fit.

use natnum::NaturalNumber;
use proptest::prelude::*;

fn nat(v: u128) -> NaturalNumber {
    NaturalNumber::from_base10(&v.to_string()).expect("decimal literal")
}

proptest! {
    /// Canonical decimal strings survive a parse/render round trip.
    #[test]
    fn prop_base10_round_trip(s in "0|[1-9][0-9]{0,40}") {
        let v = NaturalNumber::from_base10(&s).unwrap();
        prop_assert_eq!(v.to_base10(), s);
    }

    /// Addition agrees with the u128 oracle.
    #[test]
    fn prop_add_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let mut v = NaturalNumber::from_u64(a);
        NaturalNumber::add(&mut v, &NaturalNumber::from_u64(b));
        prop_assert_eq!(v.to_base10(), (a as u128 + b as u128).to_string());
    }

    /// Multiplication agrees with the u128 oracle.
    #[test]
    fn prop_multiply_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let mut v = NaturalNumber::from_u64(a);
        v.multiply(&NaturalNumber::from_u64(b));
        prop_assert_eq!(v.to_base10(), (a as u128 * b as u128).to_string());
    }

    /// Addition is commutative and associative.
    #[test]
    fn prop_add_commutative_associative(
        a in any::<u128>(),
        b in any::<u128>(),
        c in any::<u128>(),
    ) {
        let (na, nb, nc) = (nat(a), nat(b), nat(c));

        prop_assert_eq!(&na + &nb, &nb + &na);
        prop_assert_eq!(&(&na + &nb) + &nc, &na + &(&nb + &nc));
    }

    /// Subtraction floors at zero and otherwise matches the oracle.
    #[test]
    fn prop_subtract_floor(a in any::<u128>(), b in any::<u128>()) {
        let mut v = nat(a);
        v.subtract(&nat(b));
        prop_assert_eq!(v.to_base10(), a.saturating_sub(b).to_string());
        if b > a {
            prop_assert!(v.is_zero());
        }
    }

    /// dividend == quotient * divisor + remainder, remainder < divisor,
    /// on operands well past the machine range.
    #[test]
    fn prop_division_identity(
        dividend_bytes in prop::collection::vec(any::<u8>(), 0..48),
        divisor_bytes in prop::collection::vec(any::<u8>(), 1..24),
    ) {
        let dividend = NaturalNumber::from_bytes_be(&dividend_bytes);
        let divisor = NaturalNumber::from_bytes_be(&divisor_bytes);
        prop_assume!(!divisor.is_zero());

        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();

        prop_assert!(remainder < divisor);
        prop_assert_eq!(&(&quotient * &divisor) + &remainder, dividend);
    }

    /// Dividing by zero fails for every dividend.
    #[test]
    fn prop_divide_by_zero_fails(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let dividend = NaturalNumber::from_bytes_be(&bytes);
        prop_assert!(dividend.div_rem(&NaturalNumber::zero()).is_err());
    }

    /// root(v, k) is the unique r with r^k <= v < (r+1)^k.
    #[test]
    fn prop_root_adjacency(v in any::<u128>(), k in 2u64..6) {
        let value = nat(v);
        let mut r = value.clone();
        r.root(k).unwrap();

        let mut lower = r.clone();
        lower.power(k);
        prop_assert!(lower <= value);

        let mut upper = r.clone();
        NaturalNumber::add(&mut upper, &NaturalNumber::from_u64(1));
        upper.power(k);
        prop_assert!(upper > value);
    }

    /// Power agrees with the u128 oracle on in-range inputs.
    #[test]
    fn prop_power_matches_u128(base in 0u64..=100_000, exp in 0u32..=6) {
        let mut v = NaturalNumber::from_u64(base);
        v.power(exp as u64);
        prop_assert_eq!(v.to_base10(), (base as u128).pow(exp).to_string());
    }

    /// After a transfer the source is zero and the destination holds the
    /// source's old value.
    #[test]
    fn prop_transfer_moves_and_zeroes(v in any::<u128>()) {
        let mut source = nat(v);
        let before = source.clone();
        let mut destination = NaturalNumber::from_u64(7);

        destination.transfer_from(&mut source);

        prop_assert!(source.is_zero());
        prop_assert_eq!(destination, before);
    }

    /// Keypad digit entry builds the same value as parsing the digits.
    #[test]
    fn prop_digit_entry_matches_parse(s in "[0-9]{1,30}") {
        let mut v = NaturalNumber::zero();
        for c in s.chars() {
            v.push_decimal_digit(c.to_digit(10).unwrap() as u64).unwrap();
        }
        prop_assert_eq!(v, NaturalNumber::from_base10(&s).unwrap());
    }

    /// Byte and hex encodings round-trip.
    #[test]
    fn prop_bytes_and_hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let v = NaturalNumber::from_bytes_be(&bytes);
        prop_assert_eq!(NaturalNumber::from_bytes_be(&v.to_bytes_be()), v.clone());
        prop_assert_eq!(NaturalNumber::from_base16(&v.to_base16()).unwrap(), v);
    }
}
