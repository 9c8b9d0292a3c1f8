use crate::error::AppError;
use bon::Builder;
use std::fmt;
use url::Url;
use validator::{Validate, ValidationError};

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

#[derive(Builder, Validate, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
	#[builder(into, default = DEFAULT_ENDPOINT.to_owned())]
	#[validate(url)]
	pub endpoint: String,
	#[builder(into)]
	#[validate(length(min = 1), custom(function = "header_safe"))]
	pub api_token: String,
}

fn header_safe(token: &str) -> Result<(), ValidationError> {
	if token.bytes().all(|b| b.is_ascii_graphic()) { Ok(()) } else { Err(ValidationError::new("header_safe")) }
}

impl InferenceConfig {
	/// Builds a config from values captured with `option_env!`. Blank values are
	/// treated as unset.
	pub fn from_build_env(api_token: Option<&str>, endpoint: Option<&str>) -> Result<Self, AppError> {
		let api_token = api_token.map(str::trim).filter(|t| !t.is_empty()).ok_or_else(|| AppError::Config("HUGGINGFACE_API_KEY was not set at build time".to_owned()))?;
		let config = match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
			Some(endpoint) => Self::builder().api_token(api_token).endpoint(endpoint).build(),
			None => Self::builder().api_token(api_token).build(),
		};
		config.checked()
	}

	pub fn checked(self) -> Result<Self, AppError> {
		self.validate().map_err(|e| AppError::Config(e.to_string()))?;
		Ok(self)
	}

	pub fn endpoint_url(&self) -> Result<Url, AppError> {
		Url::parse(&self.endpoint).map_err(|e| AppError::Config(format!("{}: {e}", self.endpoint)))
	}
}

impl fmt::Debug for InferenceConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InferenceConfig").field("endpoint", &self.endpoint).field("api_token", &"<redacted>").finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_bart_endpoint() {
		let config = InferenceConfig::from_build_env(Some("hf_abc123"), None).unwrap();
		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(config.api_token, "hf_abc123");
		assert_eq!(config.endpoint_url().unwrap().host_str(), Some("api-inference.huggingface.co"));
	}

	#[test]
	fn endpoint_can_be_overridden() {
		let config = InferenceConfig::from_build_env(Some("tok"), Some(" http://localhost:8080/summarize ")).unwrap();
		assert_eq!(config.endpoint, "http://localhost:8080/summarize");
	}

	#[test]
	fn blank_endpoint_falls_back_to_default() {
		let config = InferenceConfig::from_build_env(Some("tok"), Some("")).unwrap();
		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
	}

	#[test]
	fn missing_token_is_a_config_error() {
		for token in [None, Some(""), Some("   ")] {
			let err = InferenceConfig::from_build_env(token, None).unwrap_err();
			assert!(matches!(&err, AppError::Config(msg) if msg.contains("HUGGINGFACE_API_KEY")), "{err:?}");
		}
	}

	#[test]
	fn rejects_tokens_that_cannot_be_headers() {
		let err = InferenceConfig::builder().api_token("hf abc").build().checked().unwrap_err();
		assert!(matches!(err, AppError::Config(_)));
		let err = InferenceConfig::builder().api_token("hf\nabc").build().checked().unwrap_err();
		assert!(matches!(err, AppError::Config(_)));
	}

	#[test]
	fn rejects_malformed_endpoints() {
		let err = InferenceConfig::from_build_env(Some("tok"), Some("not a url")).unwrap_err();
		assert!(matches!(err, AppError::Config(_)));
	}

	#[test]
	fn debug_output_hides_the_token() {
		let config = InferenceConfig::builder().api_token("hf_secret").build();
		let rendered = format!("{config:?}");
		assert!(!rendered.contains("hf_secret"));
		assert!(rendered.contains("<redacted>"));
	}
}
