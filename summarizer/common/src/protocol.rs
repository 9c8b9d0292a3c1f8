//! Wire types of the hosted summarization endpoint.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, Copy)]
pub struct InferenceRequest<'a> {
	pub inputs: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryCandidate {
	pub summary_text: String,
}

/// The endpoint answers either with a failure object or with a list of
/// candidates, regardless of the HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InferenceResponse {
	Failure(ApiFailure),
	Summaries(Vec<SummaryCandidate>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiFailure {
	pub error: ErrorDetail,
	/// Seconds until a cold model is ready.
	#[serde(default)]
	pub estimated_time: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorDetail {
	Message(String),
	Messages(Vec<String>),
}

impl ErrorDetail {
	pub fn message(&self) -> String {
		match self {
			Self::Message(msg) => msg.clone(),
			Self::Messages(msgs) => msgs.join(","),
		}
	}
}

impl InferenceResponse {
	pub fn into_summary(self) -> Result<String, AppError> {
		match self {
			Self::Failure(failure) => {
				if let Some(secs) = failure.estimated_time {
					tracing::warn!("[protocol] Model is still loading, estimated {secs:.1}s");
				}
				Err(AppError::Api(failure.error.message()))
			},
			Self::Summaries(candidates) => candidates.into_iter().next().map(|c| c.summary_text).ok_or(AppError::EmptyResponse),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn parse(body: serde_json::Value) -> InferenceResponse {
		serde_json::from_value(body).unwrap()
	}

	#[test]
	fn request_has_a_single_inputs_field() {
		let body = serde_json::to_value(InferenceRequest { inputs: "hello" }).unwrap();
		assert_eq!(body, json!({ "inputs": "hello" }));
	}

	#[test]
	fn first_candidate_wins() {
		let res = parse(json!([{ "summary_text": "first" }, { "summary_text": "second" }]));
		assert_eq!(res.into_summary(), Ok("first".to_owned()));
	}

	#[test]
	fn error_object_becomes_api_error() {
		let res = parse(json!({ "error": "busy" }));
		assert_eq!(res.into_summary(), Err(AppError::Api("busy".to_owned())));
	}

	#[test]
	fn loading_model_carries_estimated_time() {
		let res = parse(json!({ "error": "Model is currently loading", "estimated_time": 20.5 }));
		let InferenceResponse::Failure(failure) = &res else { panic!("expected failure, got {res:?}") };
		assert_eq!(failure.estimated_time, Some(20.5));
		assert_eq!(res.into_summary(), Err(AppError::Api("Model is currently loading".to_owned())));
	}

	#[test]
	fn error_lists_are_comma_joined() {
		let res = parse(json!({ "error": ["inputs is required", "bad length"] }));
		assert_eq!(res.into_summary(), Err(AppError::Api("inputs is required,bad length".to_owned())));
	}

	#[test]
	fn empty_list_is_not_a_summary() {
		assert_eq!(parse(json!([])).into_summary(), Err(AppError::EmptyResponse));
	}

	#[test]
	fn unrelated_shapes_fail_to_parse() {
		assert!(serde_json::from_value::<InferenceResponse>(json!({ "summary": "nope" })).is_err());
		assert!(serde_json::from_value::<InferenceResponse>(json!([{ "generated_text": "nope" }])).is_err());
	}
}
