//! The Charconv crate converts numbers to and from ASCII text, without
//! allocating, without locale sensitivity, and without panicking.
//!
//! It is a low-level building block for formatting, logging and serialisation
//! code. Every entry point writes to or reads from a caller-owned byte slice,
//! and reports its outcome inline as a [`ConversionResult`].
//!
//! # Integers
//!
//! All primitive integer types, and the 63-bit [`u63`], can be written and
//! parsed in any base from 2 to 36 with [`to_text_radix()`] and
//! [`from_text_radix()`], or in base 10 with [`to_text()`] and [`from_text()`].
//!
//! # Floats
//!
//! [`f32`] and [`f64`] are written in the shortest form that parses back to
//! the identical value, and parsed with correct rounding. See the [`float`]
//! module documentation for the notation rules, and [`to_text_format()`] and
//! [`from_text_format()`] for forcing fixed or scientific notation.
//!
//! # Buffer sizes
//!
//! The [`Limits`] trait gives the largest text length for each type as
//! constants, so buffers can be sized at compile time:
//!
//! ```
//! use charconv::{Limits, from_text, to_text};
//!
//! let mut buffer = [0_u8; <f64 as Limits>::MAX_CHARS10];
//! let written    = to_text(&mut buffer, -f64::MAX).into_result().unwrap();
//! assert_eq!(&buffer[..written], b"-1.7976931348623157e+308");
//!
//! let mut value  = 0.0_f64;
//! let read       = from_text(&buffer[..written], &mut value).into_result().unwrap();
//! assert_eq!(read,  written);
//! assert_eq!(value, -f64::MAX);
//! ```



//		Global configuration

#![cfg_attr(not(any(feature = "std", test)), no_std)]

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod codec;
mod errors;
pub mod float;
mod integer;
mod limits;
mod result;

#[path = "u63.rs"]
mod u63_mod;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

/// Prevents the conversion traits from being implemented outside the crate.
mod private {
	/// Supertrait of every conversion trait.
	pub trait Sealed {}
}



//		Packages

pub use codec::{FromText, ToText, from_text, to_text};
pub use errors::ConversionError;
pub use float::{Float, FloatFormat, from_text_format, to_text_format};
pub use integer::{Integer, MAX_BASE, MIN_BASE, Magnitude, from_text_radix, to_text_radix};
pub use limits::{Limits, float_max_chars, integer_max_chars, integer_max_chars10};
pub use result::ConversionResult;
pub use u63_mod::u63;
