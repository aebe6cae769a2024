//! Terafence site core
//!
//! This crate holds everything on the marketing site that carries
//! behavior rather than markup: the contact inquiry model and its
//! validation rules, the submission state machine that drives the contact
//! form, the endpoint the inquiry is posted to, and the small pieces of
//! state behind the showcase widgets.

pub mod config;
pub mod contact;
pub mod showcase;

use thiserror::Error;

pub use config::ContactConfig;
pub use contact::{
    BusinessSegment, ContactEndpoint, ContactForm, ContactRequest, ContactSubmissionFlow, Field,
    FieldErrors, FlowError, HelpType, HttpContactEndpoint, SubmissionError, SubmissionState,
    SubmitOutcome,
};
pub use showcase::{Carousel, NewsItem, NewsPreview};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
