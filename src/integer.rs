//! Integer to text and text to integer, in any base from 2 to 36.
//!
//! Both directions work on the unsigned magnitude of the value, in an unsigned
//! type of the same width. This means that the two's-complement minimum never
//! has to be negated in its own type, and that parsing can check the running
//! value against the exact limit for the sign seen, at every step.

//	The scratch array is sized for the widest magnitude in base 2, and the digit
//	table covers every value below the largest base, so indexing cannot fail.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Scratch and digit table are sized for the worst case"
)]

//	Digit arithmetic is guarded by the base check and by checked operations
//	during accumulation.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::integer_division,
	reason = "Base is validated and accumulation is checked"
)]



//		Modules

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	private::Sealed,
	result::ConversionResult,
};
use tracing::trace;



//		Constants

/// Digit characters, in value order. Formatting always uses lowercase.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest digit run for any supported magnitude: a 128-bit value in base 2.
const MAX_DIGITS: usize = 128;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;



//		Traits

//		Magnitude																
/// An unsigned primitive used to hold the absolute value of an [`Integer`].
pub trait Magnitude: Copy + Ord + Sealed {
	/// The value zero.
	const ZERO: Self;
	
	/// Divides by `base`, returning the quotient and the remainder digit.
	fn div_rem(self, base: u8) -> (Self, u8);
	
	/// Computes `self * base + digit`, or [`None`] on overflow.
	fn mul_add(self, base: u8, digit: u8) -> Option<Self>;
}

//		Integer																	
/// An integer type that can be converted to and from text.
/// 
/// The codec never operates on the integer itself, only on its sign and its
/// unsigned [`Magnitude`]. Types narrower than their magnitude type (such as
/// [`u63`](crate::u63)) express their range through
/// [`MAX_POSITIVE`](Integer::MAX_POSITIVE) and
/// [`MAX_NEGATIVE`](Integer::MAX_NEGATIVE).
/// 
pub trait Integer: Copy + Sealed {
	/// Unsigned type wide enough for the magnitude of any value.
	type Magnitude: Magnitude;
	
	/// Whether negative values exist.
	const SIGNED:       bool;
	
	/// Magnitude of the largest value.
	const MAX_POSITIVE: Self::Magnitude;
	
	/// Magnitude of the smallest value, or zero for unsigned types.
	const MAX_NEGATIVE: Self::Magnitude;
	
	/// Splits into a sign (`true` if negative) and a magnitude.
	fn into_parts(self) -> (bool, Self::Magnitude);
	
	/// Rebuilds from a sign and a magnitude. The magnitude must be within the
	/// limit for the sign.
	fn from_parts(negative: bool, magnitude: Self::Magnitude) -> Self;
}



//		Functions

//		to_text_radix															
/// Writes `value` into `buf` in the given base.
/// 
/// Emits a `-` for negative values, then the digits of the magnitude, most
/// significant first, without leading zeros. Letters are lowercase.
/// 
/// # Errors
/// 
/// * [`ConversionError::InvalidArgument`] - `base` is not in `2..=36`.
/// * [`ConversionError::ValueTooLarge`]   - `buf` cannot hold the whole text.
///   Nothing is written in this case.
/// 
/// # Examples
/// 
/// ```
/// use charconv::to_text_radix;
/// 
/// let mut buffer = [0_u8; 8];
/// let result     = to_text_radix(&mut buffer, -255_i32, 16);
/// assert_eq!(&buffer[..result.end], b"-ff");
/// ```
/// 
pub fn to_text_radix<T: Integer>(buf: &mut [u8], value: T, base: u32) -> ConversionResult {
	let Some(base) = checked_base(base) else {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	};
	let (negative, mut magnitude) = value.into_parts();
	
	//	Digits come out least significant first, so fill from the back
	let mut scratch = [0_u8; MAX_DIGITS];
	let mut start   = MAX_DIGITS;
	loop {
		let (quotient, digit) = magnitude.div_rem(base);
		start                -= 1;
		scratch[start]        = DIGITS[usize::from(digit)];
		magnitude             = quotient;
		if magnitude == T::Magnitude::ZERO {
			break;
		}
	}
	let digits = &scratch[start..];
	let sign   = usize::from(negative);
	let needed = sign + digits.len();
	
	let Some(dest) = buf.get_mut(..needed) else {
		return ConversionResult::err(buf.len(), ConversionError::ValueTooLarge);
	};
	let (prefix, body) = dest.split_at_mut(sign);
	prefix.fill(b'-');
	body.copy_from_slice(digits);
	ConversionResult::ok(needed)
}

//		from_text_radix															
/// Parses an integer from the start of `buf` in the given base.
/// 
/// Accepts a single leading `-` for signed types only, followed by one or more
/// digits valid in the base (letters in either case). Parsing stops at the
/// first byte that is not a valid digit, and `end` reports where that is. `out`
/// is only written on success.
/// 
/// # Errors
/// 
/// * [`ConversionError::InvalidArgument`] - `base` is not in `2..=36`, there
///   are no digits at the start, or there is a `-` and `T` is unsigned.
/// * [`ConversionError::ValueTooLarge`]   - the value does not fit in `T`. The
///   whole digit run is still consumed, and `end` points past it.
/// 
/// # Examples
/// 
/// ```
/// use charconv::from_text_radix;
/// 
/// let mut value = 0_u8;
/// let result    = from_text_radix(b"Z!", &mut value, 36);
/// assert_eq!(result.error, None);
/// assert_eq!(result.end,   1);
/// assert_eq!(value,        35);
/// ```
/// 
pub fn from_text_radix<T: Integer>(buf: &[u8], out: &mut T, base: u32) -> ConversionResult {
	let Some(base) = checked_base(base) else {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	};
	let negative = buf.first() == Some(&b'-');
	if negative && !T::SIGNED {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	}
	let start = usize::from(negative);
	let limit = if negative { T::MAX_NEGATIVE } else { T::MAX_POSITIVE };
	
	let mut magnitude = T::Magnitude::ZERO;
	let mut overflow  = false;
	let mut end       = start;
	for &byte in buf.iter().skip(start) {
		let Some(digit) = digit_value(byte, base) else {
			break;
		};
		if !overflow {
			match magnitude.mul_add(base, digit) {
				Some(next) if next <= limit => magnitude = next,
				_                           => overflow  = true,
			}
		}
		end += 1;
	}
	
	if end == start {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	}
	if overflow {
		return ConversionResult::err(end, ConversionError::ValueTooLarge);
	}
	*out = T::from_parts(negative, magnitude);
	ConversionResult::ok(end)
}

//		checked_base															
/// Narrows a base to a [`u8`] if it is supported.
fn checked_base(base: u32) -> Option<u8> {
	let checked = u8::try_from(base).ok().filter(|_| (MIN_BASE..=MAX_BASE).contains(&base));
	if checked.is_none() {
		trace!(base, "Base outside supported range");
	}
	checked
}

//		digit_value																
/// Value of a digit character, if it is valid in `base`.
const fn digit_value(byte: u8, base: u8) -> Option<u8> {
	let value = match byte {
		b'0'..=b'9' => byte - b'0',
		b'a'..=b'z' => byte - b'a' + 10,
		b'A'..=b'Z' => byte - b'A' + 10,
		_           => return None,
	};
	if value < base { Some(value) } else { None }
}



//		Macros

//	Magnitudes are the unsigned primitives.
macro_rules! impl_magnitude {
	($($t:ty),* $(,)?) => {$(
		impl Magnitude for $t {
			const ZERO: Self = 0;
			
			#[allow(
				clippy::cast_possible_truncation,
				clippy::unnecessary_cast,
				trivial_numeric_casts,
				reason = "Remainder is below the base"
			)]
			fn div_rem(self, base: u8) -> (Self, u8) {
				let base = Self::from(base);
				(self / base, (self % base) as u8)
			}
			
			fn mul_add(self, base: u8, digit: u8) -> Option<Self> {
				self.checked_mul(Self::from(base))?.checked_add(Self::from(digit))
			}
		}
	)*};
}

//	Unsigned primitives are their own magnitude.
macro_rules! impl_unsigned {
	($($t:ty),* $(,)?) => {$(
		impl Sealed for $t {}
		
		impl Integer for $t {
			type Magnitude = $t;
			
			const SIGNED:       bool = false;
			const MAX_POSITIVE: $t   = <$t>::MAX;
			const MAX_NEGATIVE: $t   = 0;
			
			fn into_parts(self) -> (bool, $t) {
				(false, self)
			}
			
			fn from_parts(_negative: bool, magnitude: $t) -> Self {
				magnitude
			}
		}
		
		impl_codec!($t);
	)*};
}

//	Signed primitives use the unsigned type of the same width.
macro_rules! impl_signed {
	($($t:ty => $m:ty),* $(,)?) => {$(
		impl Sealed for $t {}
		
		impl Integer for $t {
			type Magnitude = $m;
			
			const SIGNED:       bool = true;
			const MAX_POSITIVE: $m   = <$t>::MAX.unsigned_abs();
			const MAX_NEGATIVE: $m   = <$t>::MIN.unsigned_abs();
			
			fn into_parts(self) -> (bool, $m) {
				(self < 0, self.unsigned_abs())
			}
			
			//	The minimum's magnitude wraps to the minimum, and negating the
			//	minimum with wrapping leaves it unchanged.
			#[allow(clippy::cast_possible_wrap, reason = "Wrapping is the intent")]
			fn from_parts(negative: bool, magnitude: $m) -> Self {
				let value = magnitude as Self;
				if negative { value.wrapping_neg() } else { value }
			}
		}
		
		impl_codec!($t);
	)*};
}

//	Base-10 entry points for any integer type.
macro_rules! impl_codec {
	($t:ty) => {
		impl $crate::codec::ToText for $t {
			fn to_text(self, buf: &mut [u8]) -> $crate::result::ConversionResult {
				$crate::integer::to_text_radix(buf, self, 10)
			}
		}
		
		impl $crate::codec::FromText for $t {
			fn from_text(buf: &[u8], out: &mut Self) -> $crate::result::ConversionResult {
				$crate::integer::from_text_radix(buf, out, 10)
			}
		}
	};
}
pub(crate) use impl_codec;

impl_magnitude!(u8, u16, u32, u64, u128, usize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
