//! Float to text and text to float.
//!
//! Formatting produces the shortest decimal digits that parse back to exactly
//! the same value. The digits come from the Ryū algorithm (via the [`ryu`]
//! crate), and are then laid out here in fixed or scientific notation.
//!
//! Parsing validates the lexical form here, and hands the validated slice to
//! [`lexical_core`], which rounds correctly to the nearest representable value
//! (ties to even) for inputs of any length.
//!
//! # Notation
//!
//! Writing a finite value as `d.ddd × 10^e`, [`FloatFormat::General`] uses
//! scientific notation if `e < -4` or `e >= MAX_DIGITS10`, and fixed notation
//! otherwise. For [`f64`] that means fixed notation for `1e-4 <= |x| < 1e17`,
//! and for [`f32`] for `1e-4 <= |x| < 1e9`. With this rule every output fits in
//! [`Limits::MAX_CHARS10`](crate::Limits::MAX_CHARS10) bytes.



//		Modules

mod format;
mod parse;

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;



//		Packages

use crate::{
	codec::{FromText, ToText},
	private::Sealed,
	result::ConversionResult,
};
use core::ops::Neg;



//		Enums

//		FloatFormat																
/// The notation used for floats.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum FloatFormat {
	/// Fixed or scientific notation depending on the magnitude. When parsing,
	/// the exponent is optional.
	#[default]
	General,
	
	/// Always scientific notation. When parsing, the exponent is required.
	Scientific,
	
	/// Never scientific notation. When parsing, an exponent is not consumed.
	Fixed,
}



//		Traits

//		Float																	
/// A binary floating-point type that can be converted to and from text.
pub trait Float: Copy + PartialEq + Neg<Output = Self> + Sealed + ryu::Float + lexical_core::FromLexical {
	/// Decimal digits needed to distinguish every value.
	const MAX_DIGITS10: usize;
	
	/// Positive infinity.
	const INFINITY:     Self;
	
	/// A quiet NaN.
	const NAN:          Self;
	
	/// Whether the value is NaN.
	fn is_nan(self) -> bool;
	
	/// Whether the value is positive or negative infinity.
	fn is_infinite(self) -> bool;
	
	/// Whether the sign bit is set, including for `-0.0`.
	fn is_sign_negative(self) -> bool;
}



//		Functions

//		to_text_format															
/// Writes `value` into `buf` using the shortest round-trip digits.
/// 
/// NaN is written as `NaN`, and the infinities as `Infinity` and `-Infinity`.
/// Negative values, including `-0.0`, start with `-`. Scientific notation
/// always has a signed exponent of at least two digits, e.g. `1e+17`.
/// 
/// # Errors
/// 
/// [`ConversionError::ValueTooLarge`](crate::ConversionError::ValueTooLarge) if
/// `buf` cannot hold the whole text. Nothing is written in this case.
/// 
/// A buffer of [`Limits::MAX_CHARS`](crate::Limits::MAX_CHARS) bytes is
/// enough for [`FloatFormat::General`] and [`FloatFormat::Scientific`], but not
/// for [`FloatFormat::Fixed`] when the magnitude is large: `1e300` needs 301
/// bytes in fixed notation.
/// 
/// # Examples
/// 
/// ```
/// use charconv::{FloatFormat, to_text_format};
/// 
/// let mut buffer = [0_u8; 24];
/// let result     = to_text_format(&mut buffer, 1500.0_f64, FloatFormat::Scientific);
/// assert_eq!(&buffer[..result.end], b"1.5e+03");
/// ```
/// 
pub fn to_text_format<F: Float>(buf: &mut [u8], value: F, format: FloatFormat) -> ConversionResult {
	format::write(buf, value, format)
}

//		from_text_format														
/// Parses a float from the start of `buf` into `out`.
/// 
/// The accepted form is an optional `-`, digits with an optional `.` (at least
/// one digit overall), and an optional exponent of `e` or `E`, an optional
/// sign, and digits. `inf`, `infinity`, `nan` and `nan(...)` are accepted in
/// any case. A leading `+` is not accepted.
/// 
/// # Errors
/// 
/// * [`ConversionError::InvalidArgument`](crate::ConversionError::InvalidArgument) -
///   the text does not start with a float in the requested format. `out` is not
///   written.
/// * [`ConversionError::ValueTooLarge`](crate::ConversionError::ValueTooLarge) -
///   the value is beyond the finite range. `out` is set to infinity with the
///   sign of the text, and `end` reports the consumed length.
/// 
/// # Examples
/// 
/// ```
/// use charconv::{ConversionError, FloatFormat, from_text_format};
/// 
/// let mut value = 0.0_f64;
/// let result    = from_text_format(b"1e400", &mut value, FloatFormat::General);
/// assert_eq!(result.error, Some(ConversionError::ValueTooLarge));
/// assert_eq!(result.end,   5);
/// assert_eq!(value,        f64::INFINITY);
/// ```
/// 
pub fn from_text_format<F: Float>(buf: &[u8], out: &mut F, format: FloatFormat) -> ConversionResult {
	parse::read(buf, out, format)
}



//		Macros

//	The inherent methods are used so that the trait stays a thin layer.
macro_rules! impl_float {
	($($t:ty => $digits:expr),* $(,)?) => {$(
		impl Sealed for $t {}
		
		impl Float for $t {
			const MAX_DIGITS10: usize = $digits;
			const INFINITY:     Self  = <$t>::INFINITY;
			const NAN:          Self  = <$t>::NAN;
			
			fn is_nan(self) -> bool {
				<$t>::is_nan(self)
			}
			
			fn is_infinite(self) -> bool {
				<$t>::is_infinite(self)
			}
			
			fn is_sign_negative(self) -> bool {
				<$t>::is_sign_negative(self)
			}
		}
		
		impl ToText for $t {
			fn to_text(self, buf: &mut [u8]) -> ConversionResult {
				to_text_format(buf, self, FloatFormat::General)
			}
		}
		
		impl FromText for $t {
			fn from_text(buf: &[u8], out: &mut Self) -> ConversionResult {
				from_text_format(buf, out, FloatFormat::General)
			}
		}
	)*};
}

impl_float!(f32 => 9, f64 => 17);
