use std::future::Future;

use thiserror::Error;
use warbuoy_models::email_address::{EmailAddress, EmailAddressWithName};

/// Capability to hand a single email to an outbound mail provider.
///
/// The sender address is a property of the implementation.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    fn send(&self, email: Email) -> impl Future<Output = Result<EmailId, EmailSendError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<EmailAddress>,
}

/// Provider specific identifier of an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailId(pub String);

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    #[error("Mail provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<EmailId, EmailSendError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_stalled(mut self, email: Email) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| Box::pin(std::future::pending()));
        self
    }
}
