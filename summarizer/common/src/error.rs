use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised before anything leaves the browser. The display strings
/// are shown to the user as-is.
#[derive(Serialize, Deserialize, Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
	#[error("Please enter at least {min} characters")]
	TooShort { chars: usize, min: usize },
	#[error("Maximum length exceeded")]
	TooLong { chars: usize, max: usize },
}

#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("{0}")]
	Api(String),
	#[error("Could not reach the summarization endpoint: {0}")]
	Transport(String),
	#[error("The summarization endpoint returned an unreadable body: {0}")]
	Decode(String),
	#[error("The summarization endpoint returned no summaries.")]
	EmptyResponse,
	#[error("The configured API token cannot be sent as a header.")]
	InvalidCredential,
	#[error("Invalid configuration: {0}")]
	Config(String),
}
