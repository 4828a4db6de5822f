//! Custom u63 type.



//		Modules

#[cfg(test)]
#[path = "tests/u63.rs"]
mod tests;



//		Packages

use crate::{
	codec::{from_text, to_text},
	errors::ConversionError,
	integer::{Integer, impl_codec},
	limits::{Limits, integer_max_chars, integer_max_chars10},
	private::Sealed,
};
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use serde::{Deserialize, Serialize};



//		Structs

//		u63																		
/// A 63-bit unsigned integer.
/// 
/// This type represents the crossover between a [`u64`] and an [`i64`]: the
/// largest unsigned range that can be stored losslessly in a signed 64-bit
/// column, such as PostgreSQL's `BIGINT`.
/// 
/// It is a full citizen of the codec: it implements [`Integer`] and [`Limits`],
/// so it can be written and parsed in any base, and its text limits are derived
/// from its true width of 63 bits rather than from its 64-bit storage. Parsing
/// text for a value above [`u63::MAX`] fails with
/// [`ConversionError::ValueTooLarge`], exactly as it would for a primitive.
/// 
/// # Conversion
/// 
/// [`From`] is implemented where lossless (from [`u8`], [`u16`] and [`u32`]; to
/// [`u64`] and [`i64`]), and [`TryFrom`] from [`u64`].
/// 
/// # Serialisation
/// 
/// Serialises as a [`u64`]. Deserialising rejects values above [`u63::MAX`].
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "u64", into = "u64")]
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub struct u63(u64);

//󰭅		u63																		
impl u63 {
	//		Public constants													
	/// Number of bits in the value range.
	pub const BITS: u32  = 63;
	
	/// The maximum value for a `u63`.
	pub const MAX:  Self = Self(i64::MAX as u64);
	
	/// The minimum value for a `u63`.
	pub const MIN:  Self = Self(0);
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`u63`] from a [`u64`].
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::ValueTooLarge`] if the value is above
	/// [`u63::MAX`].
	/// 
	pub const fn new(value: u64) -> Result<Self, ConversionError> {
		if value > Self::MAX.0 {
			Err(ConversionError::ValueTooLarge)
		} else {
			Ok(Self(value))
		}
	}
	
	//		Public methods														
	
	//		as_u64																
	/// Represents the internal value as an unsigned 64-bit integer.
	#[must_use]
	pub const fn as_u64(&self) -> u64 {
		self.0
	}
	
	//		as_i64																
	/// Represents the internal value as a signed 64-bit integer.
	#[expect(clippy::cast_possible_wrap, reason = "Safe, as fully managed")]
	#[must_use]
	pub const fn as_i64(&self) -> i64 {
		self.0 as i64
	}
}

//󰭅		Display																	
impl Display for u63 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut buffer = [0_u8; <u63 as Limits>::MAX_CHARS10];
		let end        = to_text(&mut buffer, *self).into_result().map_err(|_| fmt::Error)?;
		let text       = buffer.get(..end).and_then(|bytes| core::str::from_utf8(bytes).ok()).ok_or(fmt::Error)?;
		f.pad_integral(true, "", text)
	}
}

//󰭅		From: u8 -> u63															
impl From<u8> for u63 {
	//		from																
	fn from(v: u8) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: u16 -> u63														
impl From<u16> for u63 {
	//		from																
	fn from(v: u16) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: u32 -> u63														
impl From<u32> for u63 {
	//		from																
	fn from(v: u32) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: u63 -> i64														
impl From<u63> for i64 {
	//		from																
	fn from(v: u63) -> Self {
		v.as_i64()
	}
}

//󰭅		From: u63 -> u64														
impl From<u63> for u64 {
	//		from																
	fn from(v: u63) -> Self {
		v.0
	}
}

//󰭅		FromStr																	
impl FromStr for u63 {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses base-10 text. Unlike [`from_text()`], the whole string must be
	/// consumed.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut value = Self::MIN;
		let end       = from_text(s.as_bytes(), &mut value).into_result()?;
		if end == s.len() { Ok(value) } else { Err(ConversionError::InvalidArgument) }
	}
}

//󰭅		Integer																	
impl Integer for u63 {
	type Magnitude = u64;
	
	const SIGNED:       bool = false;
	const MAX_POSITIVE: u64  = Self::MAX.0;
	const MAX_NEGATIVE: u64  = 0;
	
	//		into_parts															
	fn into_parts(self) -> (bool, u64) {
		(false, self.0)
	}
	
	//		from_parts															
	fn from_parts(_negative: bool, magnitude: u64) -> Self {
		Self(magnitude)
	}
}

//󰭅		Limits																	
impl Limits for u63 {
	const MAX_CHARS10: usize = integer_max_chars10(Self::BITS, false);
	const MAX_CHARS:   usize = integer_max_chars(Self::BITS, false);
}

//󰭅		Sealed																	
impl Sealed for u63 {}

//󰭅		TryFrom: u64 -> u63														
impl TryFrom<u64> for u63 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		Self::new(v)
	}
}

impl_codec!(u63);
