//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// Every conversion entry point reports its outcome inline through a
/// [`ConversionResult`](crate::ConversionResult), and this is the failure half
/// of that report.
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming text is malformed, the base is outside `2..=36`, or a minus
	/// sign was supplied for an unsigned destination type.
	#[error("Invalid argument")]
	InvalidArgument,
	
	/// The destination buffer is too small for the text, or the parsed value is
	/// outside the range of the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
