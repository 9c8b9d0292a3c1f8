use crate::{
	config::InferenceConfig,
	error::AppError,
	protocol::{InferenceRequest, InferenceResponse},
	validation::text_length,
};
use async_trait::async_trait;
use reqwest::{Client, header};
use url::Url;

/// Anything that can turn text into a summary. Futures are not `Send` so
/// browser-backed implementations qualify.
#[async_trait(?Send)]
pub trait Summarize {
	async fn summarize(&self, text: &str) -> Result<String, AppError>;
}

/// Talks to a hosted inference endpoint with a static bearer token.
#[derive(Clone, Debug)]
pub struct HuggingFaceClient {
	http: Client,
	endpoint: Url,
}

impl HuggingFaceClient {
	pub fn new(config: &InferenceConfig) -> Result<Self, AppError> {
		let endpoint = config.endpoint_url()?;

		let mut bearer = header::HeaderValue::from_str(&format!("Bearer {}", config.api_token)).map_err(|e| {
			tracing::error!("[client] API token rejected as header value: {e}");
			AppError::InvalidCredential
		})?;
		bearer.set_sensitive(true);
		let mut headers = header::HeaderMap::new();
		headers.insert(header::AUTHORIZATION, bearer);

		let http = Client::builder().default_headers(headers).build().map_err(|e| AppError::Config(format!("Failed to build client: {e}")))?;
		Ok(Self { http, endpoint })
	}
}

#[async_trait(?Send)]
impl Summarize for HuggingFaceClient {
	async fn summarize(&self, text: &str) -> Result<String, AppError> {
		tracing::debug!("[client] POST {} (length {})", self.endpoint, text_length(text));

		let res = self
			.http
			.post(self.endpoint.clone())
			.json(&InferenceRequest { inputs: text })
			.send()
			.await
			.map_err(|e| AppError::Transport(e.to_string()))?;

		let status = res.status();
		if !status.is_success() {
			tracing::debug!("[client] Endpoint answered {status}, reading body for details");
		}

		// The body, not the status, tells success from failure.
		let body = res.json::<InferenceResponse>().await.map_err(|e| AppError::Decode(format!("{status}: {e}")))?;
		body.into_summary()
	}
}
