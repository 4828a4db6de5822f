//! Lexical validation and correctly-rounded conversion.

//	Positions never exceed the input length.
#![allow(clippy::arithmetic_side_effects, reason = "Positions are bounded by the input")]



//		Packages

use super::{Float, FloatFormat};
use crate::{errors::ConversionError, result::ConversionResult};
use tracing::trace;



//		Functions

//		read																	
/// Parses a float from the start of `buf`.
pub(super) fn read<F: Float>(buf: &[u8], out: &mut F, format: FloatFormat) -> ConversionResult {
	let (negative, body) = match buf.split_first() {
		Some((b'-', rest)) => (true,  rest),
		_                  => (false, buf),
	};
	let start = usize::from(negative);
	
	if let Some((magnitude, len)) = special::<F>(body) {
		*out = if negative { -magnitude } else { magnitude };
		return ConversionResult::ok(start + len);
	}
	
	let Some(text) = scan(body, format).and_then(|len| body.get(..len)) else {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	};
	let Ok(magnitude) = lexical_core::parse::<F>(text) else {
		return ConversionResult::err(0, ConversionError::InvalidArgument);
	};
	let end = start + text.len();
	*out    = if negative { -magnitude } else { magnitude };
	
	if magnitude.is_infinite() {
		trace!(end, "Float text beyond finite range");
		return ConversionResult::err(end, ConversionError::ValueTooLarge);
	}
	ConversionResult::ok(end)
}

//		scan																	
/// Length of the longest valid number at the start of `text`, if any.
/// 
/// The sign has already been removed. Special values are handled separately.
/// 
fn scan(text: &[u8], format: FloatFormat) -> Option<usize> {
	let integral = count_digits(text, 0);
	let mut pos  = integral;
	
	if text.get(pos) == Some(&b'.') {
		let fraction = count_digits(text, pos + 1);
		if integral == 0 && fraction == 0 {
			return None;
		}
		pos += 1 + fraction;
	} else if integral == 0 {
		return None;
	}
	
	let mut has_exponent = false;
	if format != FloatFormat::Fixed && matches!(text.get(pos), Some(b'e' | b'E')) {
		let mut exponent_pos = pos + 1;
		if matches!(text.get(exponent_pos), Some(b'+' | b'-')) {
			exponent_pos += 1;
		}
		let digits = count_digits(text, exponent_pos);
		if digits > 0 {
			pos          = exponent_pos + digits;
			has_exponent = true;
		}
	}
	
	if format == FloatFormat::Scientific && !has_exponent {
		return None;
	}
	Some(pos)
}

//		special																	
/// Matches `inf`, `infinity`, `nan` or `nan(...)` in any case.
fn special<F: Float>(text: &[u8]) -> Option<(F, usize)> {
	if starts_with_ignore_case(text, b"inf") {
		let len = if starts_with_ignore_case(text, b"infinity") { 8 } else { 3 };
		return Some((F::INFINITY, len));
	}
	if starts_with_ignore_case(text, b"nan") {
		//	The optional payload is consumed but ignored
		let payload = text.get(3..).and_then(|rest| {
			let (open, inner) = rest.split_first()?;
			let chars         = inner.iter().take_while(|b| b.is_ascii_alphanumeric() || **b == b'_').count();
			(*open == b'(' && inner.get(chars) == Some(&b')')).then_some(chars + 2)
		});
		return Some((F::NAN, 3 + payload.unwrap_or(0)));
	}
	None
}

//		starts_with_ignore_case													
fn starts_with_ignore_case(text: &[u8], prefix: &[u8]) -> bool {
	text.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

//		count_digits															
/// Number of ASCII digits in `text` starting at `from`.
fn count_digits(text: &[u8], from: usize) -> usize {
	text.iter().skip(from).take_while(|b| b.is_ascii_digit()).count()
}
