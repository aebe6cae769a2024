//! Contact inquiry handling
//!
//! A [`ContactForm`] holds what the user typed. Validating it yields a
//! [`ContactRequest`], the only value that is ever sent to a
//! [`ContactEndpoint`]. [`ContactSubmissionFlow`] ties the two together
//! and owns the idle / submitting / submitted lifecycle.

pub mod endpoint;
pub mod flow;
pub mod model;
pub mod validation;

pub use endpoint::{ContactEndpoint, HttpContactEndpoint, SubmissionError};
pub use flow::{ContactSubmissionFlow, FlowError, SubmissionState, SubmitOutcome};
pub use model::{
    BusinessSegment, ContactForm, ContactRequest, Field, HelpType, UnknownOption,
    REFERRAL_SOURCES,
};
pub use validation::FieldErrors;
