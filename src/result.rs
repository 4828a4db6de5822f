//! The value returned by every conversion entry point.



//		Modules

#[cfg(test)]
#[path = "tests/result.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;



//		Structs

//		ConversionResult														
/// The outcome of a single conversion.
/// 
/// Positions are reported as an index into the caller's buffer.
/// 
/// # Fields
/// 
/// * `end`   - On success, the index one past the last byte written (when
///             formatting) or consumed (when parsing). On failure the value is
///             unspecified, except where an operation documents otherwise.
/// * `error` - [`None`] on success, otherwise the kind of failure.
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct ConversionResult {
	/// Index one past the last byte written or consumed.
	pub end:   usize,
	
	/// The failure, if any.
	pub error: Option<ConversionError>,
}

//󰭅		ConversionResult														
impl ConversionResult {
	//		Constructors														
	
	//		ok																	
	/// Creates a successful result ending at `end`.
	pub const fn ok(end: usize) -> Self {
		Self { end, error: None }
	}
	
	//		err																	
	/// Creates a failed result.
	pub const fn err(end: usize, error: ConversionError) -> Self {
		Self { end, error: Some(error) }
	}
	
	//		Public methods														
	
	//		into_result															
	/// Converts into a standard [`Result`], discarding `end` on failure.
	/// 
	/// # Errors
	/// 
	/// Returns the stored [`ConversionError`] if the conversion failed.
	/// 
	pub const fn into_result(self) -> Result<usize, ConversionError> {
		match self.error {
			None        => Ok(self.end),
			Some(error) => Err(error),
		}
	}
	
	//		is_ok																
	/// Whether the conversion succeeded.
	#[must_use]
	pub const fn is_ok(&self) -> bool {
		self.error.is_none()
	}
}

//󰭅		From: ConversionResult -> Result										
impl From<ConversionResult> for Result<usize, ConversionError> {
	//		from																
	fn from(result: ConversionResult) -> Self {
		result.into_result()
	}
}
