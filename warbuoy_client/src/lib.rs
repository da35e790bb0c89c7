//! Client side of the contact form: local validation, a single submission
//! request and the status shown to the visitor.

pub use client::{ContactClient, SubmitAck, SubmitError, DEFAULT_TIMEOUT};
pub use form::{ContactForm, FormError};
pub use state::{ContactFormState, SubmissionStatus};

mod client;
mod form;
mod state;
