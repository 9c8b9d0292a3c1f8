pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod protocol;
pub mod validation;

pub use client::{HuggingFaceClient, Summarize};
pub use config::InferenceConfig;
pub use error::{AppError, InputError};
pub use form::{FormState, GENERIC_FAILURE, SubmitTicket, SummarizerForm};
pub use validation::{LengthStatus, MAX_CHARS, MIN_CHARS};
