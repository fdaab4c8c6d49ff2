//! # natnum - Arbitrary-Precision Natural Number Engine
//!
//! A Rust library for unsigned integer arithmetic of unbounded magnitude:
//! the numeric core a calculator-style application builds its model on.
//!
//! ## Features
//!
//! - **Core kernel**: schoolbook add, floor subtract, multiply, compare
//!   over a growable little-endian limb sequence
//! - **Long division**: quotient and remainder for arbitrary operands
//! - **Exponentiation**: binary square-and-multiply
//! - **Integer roots**: floor k-th root by monotonic binary search
//! - **Conversion**: canonical decimal and hex text, big-endian bytes,
//!   checked narrowing to machine words
//! - **Serialization**: Base10/Base16/Base64 interop plus serde support
//!
//! ## Quick Start
//!
//! ```rust
//! use natnum::NaturalNumber;
//!
//! // Keypad-style digit entry: 4, 2 -> 42
//! let mut bottom = NaturalNumber::zero();
//! bottom.push_decimal_digit(4).unwrap();
//! bottom.push_decimal_digit(2).unwrap();
//! assert_eq!(bottom.to_base10(), "42");
//!
//! // In-place arithmetic with move transfer, the way a calculator
//! // model shuttles values between its registers.
//! let mut top = NaturalNumber::from_u64(1000);
//! top.root(3).unwrap();
//! bottom.transfer_from(&mut top);
//! assert!(top.is_zero());
//! assert_eq!(bottom.to_base10(), "10");
//! ```
//!
//! Subtraction floors at zero rather than underflowing, division by zero
//! and out-of-range narrowing are reported as [`NaturalError`] values, and
//! ownership transfer (`transfer_from`) moves the digit buffer instead of
//! copying it.
//!
//! ## Module Overview
//!
//! - [`bignat`] - the reference limb-vector implementation
//! - [`natural`] - the `Natural` capability trait
//! - [`error`] - the engine error taxonomy
//! - [`serialization`] - interop formats and serde support

// Public modules
pub mod bignat;
pub mod error;
pub mod natural;
pub mod serialization;

// Re-export commonly used types for convenience
pub use bignat::NaturalNumber;
pub use error::NaturalError;
pub use natural::Natural;
pub use serialization::SerializationFormat;
