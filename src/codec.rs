//! Base-10 entry points shared by the integer and float codecs.



//		Packages

use crate::{private::Sealed, result::ConversionResult};



//		Traits

//		ToText																	
/// A value that can be written as base-10 text.
pub trait ToText: Copy + Sealed {
	/// Writes the value into `buf`. See [`to_text()`].
	fn to_text(self, buf: &mut [u8]) -> ConversionResult;
}

//		FromText																
/// A value that can be parsed from base-10 text.
pub trait FromText: Sized + Sealed {
	/// Parses a value from the start of `buf`. See [`from_text()`].
	fn from_text(buf: &[u8], out: &mut Self) -> ConversionResult;
}



//		Functions

//		to_text																	
/// Writes `value` into `buf` as base-10 text.
/// 
/// Integers are written as by [`to_text_radix()`](crate::to_text_radix()) with
/// a base of 10. Floats are written in the shortest form that parses back to
/// the same value, as by [`to_text_format()`](crate::to_text_format()) with
/// [`FloatFormat::General`](crate::FloatFormat::General).
/// 
/// # Errors
/// 
/// [`ConversionError::ValueTooLarge`](crate::ConversionError::ValueTooLarge) if
/// `buf` cannot hold the text. A buffer of
/// [`Limits::MAX_CHARS10`](crate::Limits::MAX_CHARS10) bytes never fails.
/// 
/// # Examples
/// 
/// ```
/// use charconv::to_text;
/// 
/// let mut buffer = [0_u8; 24];
/// let result     = to_text(&mut buffer, 1.0_f64 / 3.0);
/// assert_eq!(&buffer[..result.end], b"0.3333333333333333");
/// ```
/// 
pub fn to_text<T: ToText>(buf: &mut [u8], value: T) -> ConversionResult {
	value.to_text(buf)
}

//		from_text																
/// Parses a base-10 value from the start of `buf` into `out`.
/// 
/// Trailing bytes that are not part of the number are left unconsumed, and
/// `end` reports how far parsing got.
/// 
/// # Errors
/// 
/// * [`ConversionError::InvalidArgument`](crate::ConversionError::InvalidArgument) -
///   the text does not start with a number of the right form.
/// * [`ConversionError::ValueTooLarge`](crate::ConversionError::ValueTooLarge) -
///   the number is outside the range of `T`.
/// 
/// # Examples
/// 
/// ```
/// use charconv::{ConversionError, from_text};
/// 
/// let mut value = 0_u32;
/// assert_eq!(from_text(b"-5", &mut value).error, Some(ConversionError::InvalidArgument));
/// assert_eq!(from_text(b"42;", &mut value).end,  2);
/// assert_eq!(value, 42);
/// ```
/// 
pub fn from_text<T: FromText>(buf: &[u8], out: &mut T) -> ConversionResult {
	T::from_text(buf, out)
}
