//! Arbitrary-precision natural numbers
//!
//! Reference implementation of the [`Natural`] contract, backed by a
//! growable vector of 64-bit limbs stored little-endian (least significant
//! limb first). The canonical representation of zero is the empty limb
//! vector; no value ever carries superfluous high zero limbs, and every
//! operation re-establishes that invariant before returning.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

use crate::error::NaturalError;
use crate::natural::Natural;

/// An unsigned integer of unbounded magnitude.
///
/// # Examples
/// ```
/// use natnum::NaturalNumber;
///
/// let mut a = NaturalNumber::from_u64(100);
/// let b = NaturalNumber::from_u64(7);
/// let rem = a.divide(&b).unwrap();
/// assert_eq!(a.to_base10(), "14");
/// assert_eq!(rem.to_base10(), "2");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NaturalNumber {
    /// Limbs in little-endian order (limbs[0] is least significant).
    /// Invariant: the last limb is non-zero; zero is the empty vector.
    limbs: Vec<u64>,
}

impl NaturalNumber {
    const LIMB_BITS: usize = 64;

    /// Creates the canonical zero value.
    #[inline]
    pub const fn zero() -> Self {
        NaturalNumber { limbs: Vec::new() }
    }

    /// Creates a value from a machine word.
    pub fn from_u64(value: u64) -> Self {
        if value == 0 {
            Self::zero()
        } else {
            NaturalNumber { limbs: vec![value] }
        }
    }

    /// Returns `true` if this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Resets this value to zero in place, keeping the allocation.
    pub fn clear(&mut self) {
        self.limbs.clear();
    }

    /// Number of limbs in the canonical representation (0 for zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns `true` if the limb sequence is empty, i.e. the value is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// The limbs in little-endian order.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Strips high zero limbs so the representation stays canonical.
    fn normalize(&mut self) {
        while let Some(&top) = self.limbs.last() {
            if top != 0 {
                break;
            }
            self.limbs.pop();
        }
    }

    /// Bit length (position of the highest set bit plus one; 0 for zero).
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => self.limbs.len() * Self::LIMB_BITS - top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Reads the bit at `pos` (0 is the least significant bit).
    pub fn get_bit(&self, pos: usize) -> bool {
        match self.limbs.get(pos / Self::LIMB_BITS) {
            Some(&limb) => (limb >> (pos % Self::LIMB_BITS)) & 1 == 1,
            None => false,
        }
    }

    /// Sets the bit at `pos`, growing the limb vector as needed.
    fn set_bit(&mut self, pos: usize) {
        let limb_idx = pos / Self::LIMB_BITS;
        if limb_idx >= self.limbs.len() {
            self.limbs.resize(limb_idx + 1, 0);
        }
        self.limbs[limb_idx] |= 1 << (pos % Self::LIMB_BITS);
    }

    /// Shifts left by one bit in place.
    fn shl1(&mut self) {
        let mut carry = 0u64;
        for limb in self.limbs.iter_mut() {
            let next_carry = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }
        if carry > 0 {
            self.limbs.push(carry);
        }
    }

    /// Shifts right by one bit in place.
    fn shr1(&mut self) {
        let mut carry = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let next_carry = *limb & 1;
            *limb = (*limb >> 1) | (carry << 63);
            carry = next_carry;
        }
        self.normalize();
    }

    /// Moves `source`'s value into `self` and resets `source` to zero.
    ///
    /// Takes ownership of the source's limb buffer; no limbs are copied.
    pub fn transfer_from(&mut self, source: &mut Self) {
        self.limbs = mem::take(&mut source.limbs);
    }

    /// Deep-copies `source`'s value into `self`, reusing `self`'s buffer.
    pub fn copy_from(&mut self, source: &Self) {
        self.limbs.clear();
        self.limbs.extend_from_slice(&source.limbs);
    }

    /// `self += rhs`, schoolbook addition with carry propagation.
    ///
    /// The result has at most `max(len(self), len(rhs)) + 1` limbs.
    pub fn add(&mut self, rhs: &Self) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }

        let mut carry = 0u64;
        for i in 0..self.limbs.len() {
            if i >= rhs.limbs.len() && carry == 0 {
                break;
            }
            let b = rhs.limbs.get(i).copied().unwrap_or(0);

            let (sum1, overflow1) = self.limbs[i].overflowing_add(b);
            let (sum2, overflow2) = sum1.overflowing_add(carry);

            self.limbs[i] = sum2;
            carry = (overflow1 as u64) + (overflow2 as u64);
        }

        if carry > 0 {
            self.limbs.push(carry);
        }
    }

    /// `self = max(self - rhs, 0)`, schoolbook subtraction with borrow.
    ///
    /// Floor semantics: if `rhs > self` the result is zero. Never panics,
    /// never wraps.
    pub fn subtract(&mut self, rhs: &Self) {
        if (*self) < (*rhs) {
            self.limbs.clear();
            return;
        }

        let mut borrow = 0u64;
        for i in 0..self.limbs.len() {
            if i >= rhs.limbs.len() && borrow == 0 {
                break;
            }
            let b = rhs.limbs.get(i).copied().unwrap_or(0);

            let (diff1, underflow1) = self.limbs[i].overflowing_sub(b);
            let (diff2, underflow2) = diff1.overflowing_sub(borrow);

            self.limbs[i] = diff2;
            borrow = (underflow1 as u64) + (underflow2 as u64);
        }

        // self >= rhs, so the final borrow is always consumed.
        self.normalize();
    }

    /// `self *= rhs`, schoolbook O(n*m) multiplication with u128
    /// intermediate products.
    pub fn multiply(&mut self, rhs: &Self) {
        if self.is_zero() || rhs.is_zero() {
            self.limbs.clear();
            return;
        }

        let mut out = vec![0u64; self.limbs.len() + rhs.limbs.len()];

        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u128;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let t = (a as u128) * (b as u128) + (out[i + j] as u128) + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
            if carry > 0 {
                out[i + rhs.limbs.len()] = carry as u64;
            }
        }

        self.limbs = out;
        self.normalize();
    }

    /// Single-pass `self = self * factor + addend`.
    ///
    /// `factor` and `addend` are machine words (any value below the limb
    /// radix). This is the primitive behind decimal digit entry and text
    /// parsing: `mul_add_digit(10, d)` appends a decimal digit.
    pub fn mul_add_digit(&mut self, factor: u64, addend: u64) {
        let mut carry = addend as u128;
        for limb in self.limbs.iter_mut() {
            let t = (*limb as u128) * (factor as u128) + carry;
            *limb = t as u64;
            carry = t >> 64;
        }
        if carry > 0 {
            self.limbs.push(carry as u64);
        }
        // A zero factor collapses the high limbs to zero.
        self.normalize();
    }

    /// Appends a decimal digit at the low end: `self = self * 10 + digit`.
    ///
    /// # Errors
    /// [`NaturalError::InvalidArgument`] if `digit >= 10`; `self` is left
    /// unchanged in that case.
    pub fn push_decimal_digit(&mut self, digit: u64) -> Result<(), NaturalError> {
        if digit >= 10 {
            return Err(NaturalError::InvalidArgument(
                "decimal digit must be below 10",
            ));
        }
        self.mul_add_digit(10, digit);
        Ok(())
    }

    /// Division with remainder: `(self / divisor, self % divisor)`.
    ///
    /// Binary long division: dividend bits are shifted into the running
    /// remainder most-significant-first, subtracting the divisor and
    /// setting a quotient bit whenever the remainder reaches it.
    ///
    /// Post-condition: `self == quotient * divisor + remainder` with
    /// `remainder < divisor`.
    ///
    /// # Errors
    /// [`NaturalError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), NaturalError> {
        if divisor.is_zero() {
            return Err(NaturalError::DivisionByZero);
        }

        if self < divisor {
            return Ok((Self::zero(), self.clone()));
        }

        if divisor.limbs == [1] {
            return Ok((self.clone(), Self::zero()));
        }

        let mut quotient = Self::zero();
        let mut remainder = Self::zero();

        for i in (0..self.bit_len()).rev() {
            remainder.shl1();
            if self.get_bit(i) {
                remainder.set_bit(0);
            }

            if &remainder >= divisor {
                remainder.subtract(divisor);
                quotient.set_bit(i);
            }
        }

        Ok((quotient, remainder))
    }

    /// `self /= divisor`, returning the remainder.
    ///
    /// # Errors
    /// [`NaturalError::DivisionByZero`] if `divisor` is zero; `self` is
    /// left unchanged in that case.
    pub fn divide(&mut self, divisor: &Self) -> Result<Self, NaturalError> {
        let (quotient, remainder) = self.div_rem(divisor)?;
        self.limbs = quotient.limbs;
        Ok(remainder)
    }

    /// Divides in place by a machine-word constant, one pass over the
    /// limbs, returning the remainder. `divisor` must be non-zero.
    fn div_rem_small(&mut self, divisor: u64) -> u64 {
        debug_assert!(divisor != 0);
        let mut rem = 0u128;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem << 64) | (*limb as u128);
            *limb = (cur / divisor as u128) as u64;
            rem = cur % divisor as u128;
        }
        self.normalize();
        rem as u64
    }

    /// `self /= divisor` for a machine-word divisor, returning the
    /// remainder. One pass over the limbs, no full long division.
    ///
    /// # Errors
    /// [`NaturalError::DivisionByZero`] if `divisor` is zero; `self` is
    /// left unchanged in that case.
    pub fn div_rem_digit(&mut self, divisor: u64) -> Result<u64, NaturalError> {
        if divisor == 0 {
            return Err(NaturalError::DivisionByZero);
        }
        Ok(self.div_rem_small(divisor))
    }

    /// `self = self^exp` by binary exponentiation (square-and-multiply
    /// over the bits of `exp`): O(log exp) multiplications.
    ///
    /// Conventions: `0^0 = 1`, `x^0 = 1`, `0^k = 0` for `k > 0`.
    pub fn power(&mut self, exp: u64) {
        let mut result = Self::from_u64(1);
        let mut base = Self::zero();
        base.transfer_from(self);

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result.multiply(&base);
            }
            e >>= 1;
            if e > 0 {
                let square = base.clone();
                base.multiply(&square);
            }
        }

        self.transfer_from(&mut result);
    }

    /// `self = floor(self^(1/degree))`.
    ///
    /// Binary search over candidate roots, seeded with the upper bound
    /// `2^ceil(bit_len/degree)` (which always over-shoots the true root).
    /// Each probe is one `power` plus one comparison; the search takes
    /// O(bit_len/degree) probes. The radicand may be arbitrarily large.
    ///
    /// # Errors
    /// [`NaturalError::InvalidArgument`] if `degree < 2`; `self` is left
    /// unchanged in that case.
    pub fn root(&mut self, degree: u64) -> Result<(), NaturalError> {
        if degree < 2 {
            return Err(NaturalError::InvalidArgument(
                "root degree must be at least 2",
            ));
        }
        if self.is_zero() {
            return Ok(());
        }

        // hi = 2^ceil(bits/degree) gives hi^degree >= 2^bits > self.
        let bits = self.bit_len() as u64;
        let shift = if degree >= bits {
            1
        } else {
            ((bits + degree - 1) / degree) as usize
        };
        let mut hi = Self::zero();
        hi.set_bit(shift);
        let mut lo = Self::zero();

        // Invariant: lo^degree <= self < hi^degree.
        loop {
            let mut mid = lo.clone();
            NaturalNumber::add(&mut mid, &hi);
            mid.shr1();
            if mid == lo {
                break;
            }
            let mut probe = mid.clone();
            probe.power(degree);
            if probe <= *self {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        self.transfer_from(&mut lo);
        Ok(())
    }

    /// Narrows to a machine word.
    ///
    /// # Errors
    /// [`NaturalError::RangeOverflow`] if the value exceeds `u64::MAX`.
    /// Never truncates silently.
    pub fn to_u64(&self) -> Result<u64, NaturalError> {
        match self.limbs.len() {
            0 => Ok(0),
            1 => Ok(self.limbs[0]),
            _ => Err(NaturalError::RangeOverflow(64)),
        }
    }

    /// Renders as canonical decimal text: no sign, no separators, no
    /// leading zeros; zero renders as `"0"`.
    pub fn to_base10(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut scratch = self.clone();
        let mut digits = Vec::new();
        while !scratch.is_zero() {
            let d = scratch.div_rem_small(10);
            digits.push((b'0' + d as u8) as char);
        }

        digits.reverse();
        digits.iter().collect()
    }

    /// Parses canonical decimal text.
    ///
    /// # Errors
    /// [`NaturalError::InvalidFormat`] on an empty string or any
    /// non-digit character; nothing is mutated on failure.
    pub fn from_base10(s: &str) -> Result<Self, NaturalError> {
        if s.is_empty() {
            return Err(NaturalError::InvalidFormat("empty string".to_string()));
        }

        let mut value = Self::zero();
        for c in s.chars() {
            let d = c.to_digit(10).ok_or_else(|| {
                NaturalError::InvalidFormat(format!("unexpected character {c:?}"))
            })?;
            value.mul_add_digit(10, d as u64);
        }
        Ok(value)
    }

    /// Renders as uppercase hexadecimal, no leading zeros; zero renders
    /// as `"0"`.
    pub fn to_base16(&self) -> String {
        match self.limbs.last() {
            None => "0".to_string(),
            Some(&top) => {
                let mut out = format!("{top:X}");
                for &limb in self.limbs.iter().rev().skip(1) {
                    out.push_str(&format!("{limb:016X}"));
                }
                out
            }
        }
    }

    /// Parses hexadecimal text (either case).
    ///
    /// # Errors
    /// [`NaturalError::InvalidFormat`] on an empty string or any
    /// non-hex-digit character.
    pub fn from_base16(s: &str) -> Result<Self, NaturalError> {
        if s.is_empty() {
            return Err(NaturalError::InvalidFormat("empty string".to_string()));
        }

        let mut value = Self::zero();
        for c in s.chars() {
            let d = c.to_digit(16).ok_or_else(|| {
                NaturalError::InvalidFormat(format!("unexpected character {c:?}"))
            })?;
            value.mul_add_digit(16, d as u64);
        }
        Ok(value)
    }

    /// Minimal big-endian byte encoding; zero encodes as the empty byte
    /// string.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.limbs.len() * 8);
        for &limb in self.limbs.iter().rev() {
            for i in (0..8).rev() {
                let byte = ((limb >> (i * 8)) & 0xFF) as u8;
                if !bytes.is_empty() || byte != 0 {
                    bytes.push(byte);
                }
            }
        }
        bytes
    }

    /// Builds a value from big-endian bytes. Leading zero bytes are
    /// accepted and ignored; the empty slice is zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; (bytes.len() + 7) / 8];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }

        let mut value = NaturalNumber { limbs };
        value.normalize();
        value
    }

    /// Numeric comparison: the longer canonical limb sequence is greater;
    /// equal lengths compare limb-by-limb from most significant.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl Ord for NaturalNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        NaturalNumber::compare(self, other)
    }
}

impl PartialOrd for NaturalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Natural for NaturalNumber {
    fn zero() -> Self {
        NaturalNumber::zero()
    }

    fn from_u64(value: u64) -> Self {
        NaturalNumber::from_u64(value)
    }

    fn is_zero(&self) -> bool {
        NaturalNumber::is_zero(self)
    }

    fn clear(&mut self) {
        NaturalNumber::clear(self);
    }

    fn transfer_from(&mut self, source: &mut Self) {
        NaturalNumber::transfer_from(self, source);
    }

    fn copy_from(&mut self, source: &Self) {
        NaturalNumber::copy_from(self, source);
    }

    fn add(&mut self, rhs: &Self) {
        NaturalNumber::add(self, rhs);
    }

    fn subtract(&mut self, rhs: &Self) {
        NaturalNumber::subtract(self, rhs);
    }

    fn multiply(&mut self, rhs: &Self) {
        NaturalNumber::multiply(self, rhs);
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), NaturalError> {
        NaturalNumber::div_rem(self, divisor)
    }

    fn mul_add_digit(&mut self, factor: u64, addend: u64) {
        NaturalNumber::mul_add_digit(self, factor, addend);
    }

    fn to_u64(&self) -> Result<u64, NaturalError> {
        NaturalNumber::to_u64(self)
    }

    // The limb representation allows tighter power/root than the generic
    // defaults (bit-length seeded root bracket, buffer moves throughout).
    fn power(&mut self, exp: u64) {
        NaturalNumber::power(self, exp);
    }

    fn root(&mut self, degree: u64) -> Result<(), NaturalError> {
        NaturalNumber::root(self, degree)
    }
}

// Non-consuming operators for expression-style call sites. Subtraction
// keeps the engine's floor-at-zero semantics; division and remainder
// panic on a zero divisor exactly like the built-in integer operators,
// with `div_rem`/`divide` as the checked alternative.

impl Add for &NaturalNumber {
    type Output = NaturalNumber;

    fn add(self, rhs: &NaturalNumber) -> NaturalNumber {
        let mut out = self.clone();
        NaturalNumber::add(&mut out, rhs);
        out
    }
}

impl Sub for &NaturalNumber {
    type Output = NaturalNumber;

    /// Floor subtraction: `a - b` is zero whenever `b > a`.
    fn sub(self, rhs: &NaturalNumber) -> NaturalNumber {
        let mut out = self.clone();
        out.subtract(rhs);
        out
    }
}

impl Mul for &NaturalNumber {
    type Output = NaturalNumber;

    fn mul(self, rhs: &NaturalNumber) -> NaturalNumber {
        let mut out = self.clone();
        out.multiply(rhs);
        out
    }
}

impl Div for &NaturalNumber {
    type Output = NaturalNumber;

    /// # Panics
    /// Panics if `rhs` is zero; use [`NaturalNumber::div_rem`] for the
    /// checked form.
    fn div(self, rhs: &NaturalNumber) -> NaturalNumber {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem for &NaturalNumber {
    type Output = NaturalNumber;

    /// # Panics
    /// Panics if `rhs` is zero; use [`NaturalNumber::div_rem`] for the
    /// checked form.
    fn rem(self, rhs: &NaturalNumber) -> NaturalNumber {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl fmt::Display for NaturalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base10())
    }
}

impl FromStr for NaturalNumber {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, NaturalError> {
        NaturalNumber::from_base10(s)
    }
}
