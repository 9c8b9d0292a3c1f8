use crate::error::InputError;
use serde::{Deserialize, Serialize};
use strum::Display;

pub const MIN_CHARS: usize = 200;
pub const MAX_CHARS: usize = 2500;

/// Where a piece of text falls relative to the accepted range.
#[derive(Serialize, Deserialize, Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum LengthStatus {
	TooShort,
	Acceptable,
	TooLong,
}

/// Length as the browser measures it: UTF-16 code units, so a character
/// outside the Basic Multilingual Plane counts twice.
pub fn text_length(text: &str) -> usize {
	text.encode_utf16().count()
}

impl LengthStatus {
	pub fn of(text: &str) -> Self {
		Self::of_count(text_length(text))
	}

	pub fn of_count(chars: usize) -> Self {
		if chars < MIN_CHARS {
			Self::TooShort
		} else if chars > MAX_CHARS {
			Self::TooLong
		} else {
			Self::Acceptable
		}
	}

	pub fn is_acceptable(self) -> bool {
		self == Self::Acceptable
	}
}

impl Default for LengthStatus {
	fn default() -> Self {
		Self::of_count(0)
	}
}

/// Returns the length of `text` when it may be submitted.
pub fn validate_length(text: &str) -> Result<usize, InputError> {
	let chars = text_length(text);
	match LengthStatus::of_count(chars) {
		LengthStatus::Acceptable => Ok(chars),
		LengthStatus::TooShort => Err(InputError::TooShort { chars, min: MIN_CHARS }),
		LengthStatus::TooLong => Err(InputError::TooLong { chars, max: MAX_CHARS }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn boundaries_are_inclusive() {
		assert_eq!(LengthStatus::of(&"a".repeat(199)), LengthStatus::TooShort);
		assert_eq!(LengthStatus::of(&"a".repeat(200)), LengthStatus::Acceptable);
		assert_eq!(LengthStatus::of(&"a".repeat(2500)), LengthStatus::Acceptable);
		assert_eq!(LengthStatus::of(&"a".repeat(2501)), LengthStatus::TooLong);
		assert_eq!(LengthStatus::of(""), LengthStatus::TooShort);
	}

	#[test]
	fn bmp_characters_count_once() {
		// 200 code units, 400 bytes
		let text = "é".repeat(200);
		assert_eq!(text.len(), 400);
		assert_eq!(validate_length(&text), Ok(200));

		let text = "界".repeat(2500);
		assert!(LengthStatus::of(&text).is_acceptable());
	}

	#[test]
	fn astral_characters_count_twice() {
		assert_eq!(text_length("😀"), 2);

		// 150 emoji are 300 units: long enough
		assert_eq!(validate_length(&"😀".repeat(150)), Ok(300));
		assert_eq!(validate_length(&"😀".repeat(99)), Err(InputError::TooShort { chars: 198, min: MIN_CHARS }));
		assert_eq!(validate_length(&"😀".repeat(100)), Ok(200));

		// 2000 emoji are 4000 units: too long
		assert_eq!(validate_length(&"😀".repeat(2000)), Err(InputError::TooLong { chars: 4000, max: MAX_CHARS }));
		assert_eq!(validate_length(&"😀".repeat(1250)), Ok(2500));
		assert_eq!(LengthStatus::of(&format!("{}a", "😀".repeat(1250))), LengthStatus::TooLong);
	}

	#[test]
	fn validate_reports_the_offending_count() {
		assert_eq!(validate_length("short"), Err(InputError::TooShort { chars: 5, min: MIN_CHARS }));
		assert_eq!(validate_length(&"x".repeat(3000)), Err(InputError::TooLong { chars: 3000, max: MAX_CHARS }));
	}

	#[test]
	fn status_names_are_snake_case() {
		assert_eq!(LengthStatus::TooShort.to_string(), "too_short");
		assert_eq!(LengthStatus::Acceptable.to_string(), "acceptable");
	}
}
