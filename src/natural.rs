//! Natural-number capability trait
//!
//! This module defines the `Natural` trait: the abstract contract every
//! natural-number representation must satisfy. The engine ships one
//! reference implementation ([`crate::NaturalNumber`], a growable limb
//! sequence); alternative representations (for example a fixed-width fast
//! path that promotes to arbitrary precision on overflow) can implement
//! the same trait and remain interchangeable.
//!
//! `power`, `root`, `divide` and `push_decimal_digit` have default
//! implementations expressed purely in terms of the required operations,
//! so an implementor only has to supply the kernel.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::NaturalError;

/// Trait defining the interface of an unsigned integer of unbounded
/// magnitude.
///
/// # Laws
/// Implementations must satisfy:
/// - No negative values exist: `subtract` floors at zero instead of
///   underflowing or failing.
/// - `transfer_from` is a move: afterwards the source is zero and the
///   destination holds the source's old value, with no deep copy of the
///   underlying digits.
/// - Ordering is numeric: `a < b` exactly when the represented magnitudes
///   compare that way.
/// - `to_u64` never truncates: it fails with
///   [`NaturalError::RangeOverflow`] rather than return a wrong value.
///
/// # Mutation discipline
/// The arithmetic operations mutate their receiver and borrow their
/// argument immutably, except `transfer_from` which resets its source to
/// zero. No operation may be called concurrently with another operation
/// touching the same instance; exclusive ownership is the concurrency
/// discipline, not locking.
pub trait Natural:
    Sized + Clone + Eq + Ord + Default + Display + FromStr<Err = NaturalError>
{
    /// Returns the canonical zero value.
    fn zero() -> Self;

    /// Builds a value from a machine word.
    fn from_u64(value: u64) -> Self;

    /// Returns `true` if this value is zero.
    fn is_zero(&self) -> bool;

    /// Resets this value to zero in place.
    fn clear(&mut self);

    /// Moves `source`'s value into `self` and resets `source` to zero.
    ///
    /// This is a buffer move, never a digit-by-digit copy; it is the cheap
    /// way to pass a large value along a computation.
    fn transfer_from(&mut self, source: &mut Self);

    /// Deep-copies `source`'s value into `self`, leaving `source` intact.
    fn copy_from(&mut self, source: &Self);

    /// `self += rhs`.
    fn add(&mut self, rhs: &Self);

    /// `self = max(self - rhs, 0)`.
    ///
    /// Floor semantics: subtracting a larger value yields zero, never an
    /// error and never wraparound.
    fn subtract(&mut self, rhs: &Self);

    /// `self *= rhs`.
    fn multiply(&mut self, rhs: &Self);

    /// Returns `(self / divisor, self % divisor)` without mutating `self`.
    ///
    /// # Errors
    /// [`NaturalError::DivisionByZero`] if `divisor` is zero.
    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), NaturalError>;

    /// Single-pass `self = self * factor + addend` for machine-word
    /// `factor` and `addend`.
    fn mul_add_digit(&mut self, factor: u64, addend: u64);

    /// Narrows to a machine word.
    ///
    /// # Errors
    /// [`NaturalError::RangeOverflow`] if the value exceeds `u64::MAX`.
    fn to_u64(&self) -> Result<u64, NaturalError>;

    /// `self /= divisor`, returning the remainder.
    ///
    /// # Errors
    /// [`NaturalError::DivisionByZero`] if `divisor` is zero; `self` is
    /// left unchanged in that case.
    fn divide(&mut self, divisor: &Self) -> Result<Self, NaturalError> {
        let (quotient, remainder) = self.div_rem(divisor)?;
        *self = quotient;
        Ok(remainder)
    }

    /// Appends a decimal digit at the low end: `self = self * 10 + digit`.
    ///
    /// This is the keypad entry operation: typing `4` then `2` onto a zero
    /// value yields 42.
    ///
    /// # Errors
    /// [`NaturalError::InvalidArgument`] if `digit >= 10`; `self` is left
    /// unchanged in that case.
    fn push_decimal_digit(&mut self, digit: u64) -> Result<(), NaturalError> {
        if digit >= 10 {
            return Err(NaturalError::InvalidArgument(
                "decimal digit must be below 10",
            ));
        }
        self.mul_add_digit(10, digit);
        Ok(())
    }

    /// `self = self^exp` by binary exponentiation.
    ///
    /// Square-and-multiply over the bits of `exp`: O(log exp)
    /// multiplications instead of O(exp).
    ///
    /// # Conventions
    /// - `0^0 = 1`
    /// - `x^0 = 1` for `x > 0`
    /// - `0^k = 0` for `k > 0`
    fn power(&mut self, exp: u64) {
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
    /// Brackets the root by doubling an upper-bound candidate, then
    /// binary-searches for the unique `r` with
    /// `r^degree <= self < (r+1)^degree`. Every probe is one `power` plus
    /// one comparison, and the search takes O(log self) probes.
    ///
    /// The radicand may be arbitrarily large; only the degree is a machine
    /// word.
    ///
    /// # Errors
    /// [`NaturalError::InvalidArgument`] if `degree < 2`; `self` is left
    /// unchanged in that case.
    fn root(&mut self, degree: u64) -> Result<(), NaturalError> {
        if degree < 2 {
            return Err(NaturalError::InvalidArgument(
                "root degree must be at least 2",
            ));
        }
        if self.is_zero() {
            return Ok(());
        }

        let two = Self::from_u64(2);

        // Bracket: grow hi until hi^degree > self. lo trails one step
        // behind, so lo^degree <= self holds throughout.
        let mut lo = Self::zero();
        let mut hi = Self::from_u64(1);
        loop {
            let mut probe = hi.clone();
            probe.power(degree);
            if probe > *self {
                break;
            }
            lo.copy_from(&hi);
            hi.multiply(&two);
        }

        // Binary search maintaining lo^degree <= self < hi^degree.
        loop {
            let mut mid = lo.clone();
            mid.add(&hi);
            mid.divide(&two)?;
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
}
