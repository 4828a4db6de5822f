//! Layout of shortest round-trip digits.

//	All lengths are bounded by the digit count and a three-digit exponent, and
//	every write goes through a bounds-checked cursor.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::integer_division,
	reason = "Lengths and exponents are small and bounded"
)]



//		Packages

use super::{Float, FloatFormat};
use crate::{errors::ConversionError, result::ConversionResult};



//		Constants

/// Most significant digits produced for any supported type.
const MAX_SIGNIFICANT: usize = 17;



//		Structs

//		Decimal																	
/// A finite value as significant digits and a scientific exponent.
/// 
/// The value is `d[0].d[1]d[2]... × 10^exponent`. Zero is the single digit
/// `0` with an exponent of zero. There are no trailing zeros otherwise.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Decimal {
	/// ASCII digits, of which the first `len` are used.
	digits:   [u8; MAX_SIGNIFICANT],
	
	/// Number of digits used.
	len:      usize,
	
	/// Power of ten of the first digit.
	exponent: i32,
}

//󰭅		Decimal																	
impl Decimal {
	//		from_shortest														
	/// Reads the digits and exponent back out of Ryū's output.
	/// 
	/// Ryū lays its digits out in one of several forms (`123.0`, `0.00123`,
	/// `1.23e30`, `1e-7`), which all reduce to a run of mantissa digits with
	/// an optional point and an optional exponent. The sign is ignored.
	/// 
	pub(super) fn from_shortest(text: &[u8]) -> Self {
		let mut digits         = [b'0'; MAX_SIGNIFICANT];
		let mut len            = 0_usize;
		let mut seen           = 0_i32;
		let mut leading_zeros  = 0_i32;
		let mut integer_digits = None;
		let mut rest           = text;
		
		while let Some((&byte, tail)) = rest.split_first() {
			match byte {
				b'0'..=b'9' => {
					if len == 0 && byte == b'0' {
						leading_zeros += 1;
					} else {
						if let Some(slot) = digits.get_mut(len) {
							*slot = byte;
						}
						len += 1;
					}
					seen += 1;
				}
				b'.'        => integer_digits = Some(seen),
				b'e' | b'E' => {
					rest = tail;
					break;
				}
				_           => {}
			}
			rest = tail;
		}
		//	Anything left is the exponent
		let exponent_offset = parse_exponent(rest);
		
		len = len.min(MAX_SIGNIFICANT);
		while len > 1 && digits.get(len - 1) == Some(&b'0') {
			len -= 1;
		}
		if len == 0 {
			return Self { digits, len: 1, exponent: 0 };
		}
		Self {
			digits,
			len,
			exponent: integer_digits.unwrap_or(seen) - 1 - leading_zeros + exponent_offset,
		}
	}
	
	//		significant															
	/// The used digits.
	fn significant(&self) -> &[u8] {
		self.digits.get(..self.len).unwrap_or_default()
	}
	
	//		fixed_len															
	/// Length of the fixed-notation text, without sign.
	fn fixed_len(&self) -> usize {
		let n = self.len as i32;
		let e = self.exponent;
		if e >= n - 1 {
			//	Digits then padding zeros, no point
			(e + 1) as usize
		} else if e >= 0 {
			//	Point inside the digits
			self.len + 1
		} else {
			//	"0." then zeros then digits
			2 + (-e - 1) as usize + self.len
		}
	}
	
	//		scientific_len														
	/// Length of the scientific-notation text, without sign.
	fn scientific_len(&self) -> usize {
		let point = usize::from(self.len > 1);
		self.len + point + 2 + exponent_digits(self.exponent)
	}
	
	//		write_fixed															
	/// Writes fixed notation.
	fn write_fixed(&self, cursor: &mut Cursor<'_>) {
		let digits = self.significant();
		let e      = self.exponent;
		if e >= self.len as i32 - 1 {
			cursor.extend(digits);
			cursor.zeros((e + 1) as usize - self.len);
		} else if e >= 0 {
			let (integral, fraction) = digits.split_at((e + 1) as usize);
			cursor.extend(integral);
			cursor.push(b'.');
			cursor.extend(fraction);
		} else {
			cursor.extend(b"0.");
			cursor.zeros((-e - 1) as usize);
			cursor.extend(digits);
		}
	}
	
	//		write_scientific													
	/// Writes scientific notation.
	fn write_scientific(&self, cursor: &mut Cursor<'_>) {
		if let Some((first, rest)) = self.significant().split_first() {
			cursor.push(*first);
			if !rest.is_empty() {
				cursor.push(b'.');
				cursor.extend(rest);
			}
		}
		cursor.push(b'e');
		cursor.push(if self.exponent < 0 { b'-' } else { b'+' });
		let magnitude = self.exponent.unsigned_abs();
		if magnitude >= 100 {
			cursor.push(b'0' + (magnitude / 100) as u8);
		}
		cursor.push(b'0' + (magnitude / 10 % 10) as u8);
		cursor.push(b'0' + (magnitude % 10) as u8);
	}
}

//		Cursor																	
/// Sequential writer over a slice that has already been sized.
struct Cursor<'a> {
	/// Destination.
	buf: &'a mut [u8],
	
	/// Next write position.
	pos: usize,
}

//󰭅		Cursor																	
impl<'a> Cursor<'a> {
	//		new																	
	fn new(buf: &'a mut [u8]) -> Self {
		Self { buf, pos: 0 }
	}
	
	//		push																
	fn push(&mut self, byte: u8) {
		if let Some(slot) = self.buf.get_mut(self.pos) {
			*slot = byte;
		}
		self.pos += 1;
	}
	
	//		extend																
	fn extend(&mut self, bytes: &[u8]) {
		for &byte in bytes {
			self.push(byte);
		}
	}
	
	//		zeros																
	fn zeros(&mut self, count: usize) {
		for _ in 0..count {
			self.push(b'0');
		}
	}
}



//		Functions

//		write																	
/// Formats `value` into `buf`.
pub(super) fn write<F: Float>(buf: &mut [u8], value: F, format: FloatFormat) -> ConversionResult {
	if value.is_nan() {
		return write_literal(buf, b"NaN");
	}
	if value.is_infinite() {
		return write_literal(buf, if value.is_sign_negative() { b"-Infinity" } else { b"Infinity" });
	}
	
	let mut shortest = ryu::Buffer::new();
	let decimal      = Decimal::from_shortest(shortest.format_finite(value).as_bytes());
	let scientific   = match format {
		FloatFormat::General    => decimal.exponent < -4 || decimal.exponent >= F::MAX_DIGITS10 as i32,
		FloatFormat::Scientific => true,
		FloatFormat::Fixed      => false,
	};
	let sign   = usize::from(value.is_sign_negative());
	let needed = sign + if scientific { decimal.scientific_len() } else { decimal.fixed_len() };
	
	let Some(dest) = buf.get_mut(..needed) else {
		return ConversionResult::err(buf.len(), ConversionError::ValueTooLarge);
	};
	let mut cursor = Cursor::new(dest);
	if sign == 1 {
		cursor.push(b'-');
	}
	if scientific {
		decimal.write_scientific(&mut cursor);
	} else {
		decimal.write_fixed(&mut cursor);
	}
	ConversionResult::ok(needed)
}

//		write_literal															
/// Copies a fixed literal, if it fits.
fn write_literal(buf: &mut [u8], literal: &[u8]) -> ConversionResult {
	match buf.get_mut(..literal.len()) {
		Some(dest) => {
			dest.copy_from_slice(literal);
			ConversionResult::ok(literal.len())
		}
		None       => ConversionResult::err(buf.len(), ConversionError::ValueTooLarge),
	}
}

//		parse_exponent															
/// Reads an optionally negative decimal exponent. Only ever given Ryū output.
fn parse_exponent(text: &[u8]) -> i32 {
	let (negative, digits) = match text.split_first() {
		Some((b'-', rest)) => (true,  rest),
		Some((b'+', rest)) => (false, rest),
		_                  => (false, text),
	};
	let magnitude = digits.iter()
		.take_while(|b| b.is_ascii_digit())
		.fold(0_i32, |acc, &b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')))
	;
	if negative { -magnitude } else { magnitude }
}

//		exponent_digits															
/// Digits printed for an exponent: at least two.
const fn exponent_digits(exponent: i32) -> usize {
	if exponent.unsigned_abs() >= 100 { 3 } else { 2 }
}
