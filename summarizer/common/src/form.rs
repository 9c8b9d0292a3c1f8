//! State of the summarizer form.
//!
//! The form owns the input text and a single tagged [`FormState`]. The output
//! text and the in-flight indicator are both read off that state, so they can
//! never disagree.
//!
//! Every submission is stamped with a generation. Clearing the form or editing
//! the text while a request is pending moves the generation on, and the late
//! response is then dropped by [`SummarizerForm::settle`].

use crate::{
	client::Summarize,
	error::{AppError, InputError},
	validation::{LengthStatus, text_length, validate_length},
};
use serde::{Deserialize, Serialize};

/// Shown for every failure the endpoint did not explain itself.
pub const GENERIC_FAILURE: &str = "Something went wrong while summarizing.";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
	#[default]
	Idle,
	Submitting,
	Succeeded(String),
	Failed(String),
}

/// Proof that a submission was started. Hand it back to
/// [`SummarizerForm::settle`] together with the backend's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
	generation: u64,
	text: String,
}

impl SubmitTicket {
	pub fn text(&self) -> &str {
		&self.text
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizerForm {
	input: String,
	status: LengthStatus,
	state: FormState,
	generation: u64,
}

impl SummarizerForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	/// Length shown in the counter, in UTF-16 code units.
	pub fn char_count(&self) -> usize {
		text_length(&self.input)
	}

	pub fn is_valid(&self) -> bool {
		self.status.is_acceptable()
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn is_submitting(&self) -> bool {
		self.state == FormState::Submitting
	}

	/// Text for the summary card; empty unless a request has settled.
	pub fn output(&self) -> &str {
		match &self.state {
			FormState::Succeeded(text) | FormState::Failed(text) => text,
			FormState::Idle | FormState::Submitting => "",
		}
	}

	pub fn update_input(&mut self, text: impl Into<String>) {
		let text = text.into();
		if self.is_submitting() && text != self.input {
			tracing::debug!("[form] Input edited mid-request, dropping generation {}", self.generation);
			self.supersede();
		}
		self.status = LengthStatus::of(&text);
		self.input = text;
	}

	/// Validates the current input and, when it passes, moves to `Submitting`.
	/// A rejected submission leaves the form untouched.
	pub fn begin_submit(&mut self) -> Result<SubmitTicket, InputError> {
		let chars = validate_length(&self.input).inspect_err(|e| tracing::info!("[form] Submission rejected: {e}"))?;
		self.generation += 1;
		self.state = FormState::Submitting;
		tracing::debug!("[form] Submitting generation {} (length {chars})", self.generation);
		Ok(SubmitTicket { generation: self.generation, text: self.input.clone() })
	}

	/// Applies a backend answer. Returns `false`, leaving the form alone, when
	/// the ticket no longer belongs to the pending request.
	pub fn settle(&mut self, ticket: SubmitTicket, outcome: Result<String, AppError>) -> bool {
		if ticket.generation != self.generation || !self.is_submitting() {
			tracing::debug!("[form] Dropping stale response for generation {} (current {})", ticket.generation, self.generation);
			return false;
		}
		self.state = match outcome {
			Ok(summary) => FormState::Succeeded(summary),
			Err(AppError::Api(msg)) => FormState::Failed(format!("Error: {msg}")),
			Err(e) => {
				tracing::error!("[form] Summarization failed: {e}");
				FormState::Failed(GENERIC_FAILURE.to_owned())
			},
		};
		true
	}

	/// Validate, call `backend` once, and record the result. Only input
	/// validation is reported as an error; backend failures end up in
	/// [`Self::output`].
	pub async fn submit<S: Summarize + ?Sized>(&mut self, backend: &S) -> Result<(), InputError> {
		let ticket = self.begin_submit()?;
		let outcome = backend.summarize(ticket.text()).await;
		self.settle(ticket, outcome);
		Ok(())
	}

	pub fn reset(&mut self) {
		if self.is_submitting() {
			tracing::debug!("[form] Cleared mid-request, dropping generation {}", self.generation);
		}
		self.supersede();
		self.input.clear();
		self.status = LengthStatus::of("");
	}

	fn supersede(&mut self) {
		if self.is_submitting() {
			self.generation += 1;
		}
		self.state = FormState::Idle;
	}
}
