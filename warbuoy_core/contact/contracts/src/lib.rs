use std::future::Future;

use thiserror::Error;
use warbuoy_email_contracts::EmailId;
use warbuoy_models::contact::LeadSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Process a lead submitted through the contact form.
    ///
    /// Submissions that fill the honeypot field are acknowledged without any
    /// processing. Valid leads are emailed to the configured recipient or, if
    /// that is not possible, written to the log as a [`FallbackRecord`].
    fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> impl Future<Output = Result<LeadReceipt, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadReceipt {
    /// The honeypot field was filled in.
    Ignored,
    Processed(Delivery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered(EmailId),
    LoggedFallback(FallbackRecord),
}

impl Delivery {
    pub fn emailed(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// The delivery-of-record for a lead that could not be emailed.
///
/// Optional fields that were not provided are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRecord {
    pub reason: FallbackReason,
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub budget: String,
    pub services: String,
    pub message_preview: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No mail provider or no recipient is configured.
    NotConfigured,
    /// The mail provider failed or did not answer in time.
    DispatchFailed,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::DispatchFailed => "dispatch_failed",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Missing or invalid fields.")]
    InvalidFields,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_lead(
        mut self,
        submission: LeadSubmission,
        result: Result<LeadReceipt, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_lead()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emailed() {
        assert!(Delivery::Delivered(EmailId("id".into())).emailed());
        assert!(!Delivery::LoggedFallback(FallbackRecord {
            reason: FallbackReason::NotConfigured,
            name: "Jo".into(),
            email: "jo@x.com".into(),
            company: String::new(),
            website: String::new(),
            budget: String::new(),
            services: String::new(),
            message_preview: "Hi".into(),
        })
        .emailed());
    }
}
