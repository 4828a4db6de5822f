//! Worst-case text lengths, available at compile time for sizing buffers.
//!
//! For integers these follow directly from the bit width: the longest base-10
//! text is the digit count of the largest magnitude, and the longest text in
//! any base is the base-2 form. For floats both constants cover the shortest
//! round-trip output in its longest layout, which is the scientific form with
//! all [`max_digits10`](crate::Float::MAX_DIGITS10) digits and the widest
//! exponent.

//	Widths are at most a few hundred bits.
#![allow(clippy::arithmetic_side_effects, reason = "Bit widths are small")]



//		Modules

#[cfg(test)]
#[path = "tests/limits.rs"]
mod tests;



//		Traits

//		Limits																	
/// Compile-time buffer sizes for a numeric type.
/// 
/// A buffer of [`MAX_CHARS10`](Limits::MAX_CHARS10) bytes is always enough for
/// [`to_text()`](crate::to_text()), and a buffer of
/// [`MAX_CHARS`](Limits::MAX_CHARS) bytes is always enough for
/// [`to_text_radix()`](crate::to_text_radix()) in any base.
/// 
/// For floats both constants cover [`FloatFormat::General`](crate::FloatFormat::General)
/// and [`FloatFormat::Scientific`](crate::FloatFormat::Scientific).
/// [`FloatFormat::Fixed`](crate::FloatFormat::Fixed) never uses an exponent,
/// so values far from one need more: up to 327 bytes for [`f64`] (`-5e-324`)
/// and 48 for [`f32`] (`-1e-45`).
/// 
/// # Examples
/// 
/// ```
/// use charconv::{Limits, to_text};
/// 
/// let mut buffer = [0_u8; <i64 as Limits>::MAX_CHARS10];
/// let result     = to_text(&mut buffer, i64::MIN);
/// assert!(result.is_ok());
/// assert_eq!(result.end, buffer.len());
/// ```
/// 
pub trait Limits {
	/// Bytes needed for any value of the type in base 10.
	const MAX_CHARS10: usize;
	
	/// Bytes needed for any value of the type in any supported base.
	const MAX_CHARS:   usize;
}



//		Functions

//		integer_max_chars10														
/// Longest base-10 text for an integer of `bits` bits.
/// 
/// The largest magnitude is `2^bits - 1` for unsigned types and `2^(bits - 1)`
/// for signed ones. Either way it has `floor(m * log10(2)) + 1` digits, where
/// `m` is the number of magnitude bits, computed as `(m * 1233) >> 12`. Signed
/// types add one byte for the sign.
/// 
/// The result is exact for `bits` in `1..=128`, which covers every width the
/// codec can convert. 1233/4096 only approximates log10(2), and from 681
/// magnitude bits upwards the result is one too small.
/// 
#[must_use]
pub const fn integer_max_chars10(bits: u32, signed: bool) -> usize {
	let magnitude_bits = (bits as usize).saturating_sub(signed as usize);
	((magnitude_bits * 1233) >> 12) + 1 + signed as usize
}

//		integer_max_chars														
/// Longest text in any base for an integer of `bits` bits.
/// 
/// The base-2 form of the largest magnitude has `bits` digits: for unsigned
/// types this is `2^bits - 1`, and for signed types it is the magnitude of the
/// minimum, `2^(bits - 1)`, which is preceded by the sign.
/// 
#[must_use]
pub const fn integer_max_chars(bits: u32, signed: bool) -> usize {
	bits as usize + signed as usize
}

//		float_max_chars															
/// Longest shortest-round-trip text for a float.
/// 
/// Sign, `max_digits10` digits, decimal point, `e`, exponent sign, and the
/// exponent digits.
/// 
#[must_use]
pub const fn float_max_chars(max_digits10: usize, exponent_digits: usize) -> usize {
	1 + max_digits10 + 1 + 1 + 1 + exponent_digits
}



//		Macros

//	Integer limits depend only on the width and signedness.
macro_rules! impl_integer_limits {
	($($t:ty),* $(,)?) => {$(
		impl Limits for $t {
			const MAX_CHARS10: usize = integer_max_chars10(<$t>::BITS, <$t>::MIN != 0);
			const MAX_CHARS:   usize = integer_max_chars(<$t>::BITS, <$t>::MIN != 0);
		}
	)*};
}

impl_integer_limits!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

//󰭅		Limits: f32																
impl Limits for f32 {
	const MAX_CHARS10: usize = float_max_chars(9, 2);
	const MAX_CHARS:   usize = Self::MAX_CHARS10;
}

//󰭅		Limits: f64																
impl Limits for f64 {
	const MAX_CHARS10: usize = float_max_chars(17, 3);
	const MAX_CHARS:   usize = Self::MAX_CHARS10;
}
