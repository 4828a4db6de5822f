//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};



//		Tests

mod constructors {
	use super::*;
	
	//		ok																	
	#[test]
	fn ok__fields() {
		let result = ConversionResult::ok(7);
		assert_eq!(result.end,   7);
		assert_eq!(result.error, None);
	}
	
	//		err																	
	#[test]
	fn err__fields() {
		let result = ConversionResult::err(3, ConversionError::ValueTooLarge);
		assert_eq!(result.end,   3);
		assert_eq!(result.error, Some(ConversionError::ValueTooLarge));
	}
}

mod public_methods {
	use super::*;
	
	//		into_result															
	#[test]
	fn into_result__ok() {
		assert_ok_eq!(ConversionResult::ok(5).into_result(), 5);
	}
	#[test]
	fn into_result__err() {
		assert_err_eq!(
			ConversionResult::err(5, ConversionError::InvalidArgument).into_result(),
			ConversionError::InvalidArgument
		);
	}
	
	//		is_ok																
	#[test]
	fn is_ok__ok() {
		assert!(ConversionResult::ok(0).is_ok());
	}
	#[test]
	fn is_ok__err() {
		assert!(!ConversionResult::err(0, ConversionError::ValueTooLarge).is_ok());
	}
}

mod conversions {
	use super::*;
	
	//		From: ConversionResult -> Result									
	#[test]
	fn from__ok() {
		let result: Result<usize, ConversionError> = ConversionResult::ok(2).into();
		assert_ok_eq!(result, 2);
	}
	#[test]
	fn from__err_with_question_mark() {
		fn parse_len(result: ConversionResult) -> Result<usize, ConversionError> {
			let end = Result::from(result)?;
			Ok(end * 2)
		}
		assert_ok_eq!(parse_len(ConversionResult::ok(4)), 8);
		assert_err_eq!(
			parse_len(ConversionResult::err(4, ConversionError::ValueTooLarge)),
			ConversionError::ValueTooLarge
		);
	}
}
