use tokio::sync::watch;
use tracing::info;

use crate::{ContactClient, ContactForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Ok { email: String },
    Error { message: String },
}

/// Status of the contact form shown to the visitor.
///
/// Each call to [`submit`](Self::submit) walks `Idle -> Sending -> Ok | Error`.
/// Nothing is retried. Observers get every transition through
/// [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct ContactFormState {
    status: watch::Sender<SubmissionStatus>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            status: watch::Sender::new(SubmissionStatus::Idle),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Validates `form` and, if that succeeds, submits it with `client`.
    ///
    /// Invalid forms go straight to `Error` without a request.
    pub async fn submit(&self, client: &ContactClient, form: &ContactForm) -> SubmissionStatus {
        if let Err(err) = form.validate() {
            return self.set(SubmissionStatus::Error {
                message: err.to_string(),
            });
        }

        self.set(SubmissionStatus::Sending);

        let status = match client.submit(form).await {
            Ok(ack) => {
                info!(emailed = ?ack.emailed, "contact form submitted");
                SubmissionStatus::Ok {
                    email: form.email.trim().into(),
                }
            }
            Err(err) => SubmissionStatus::Error {
                message: err.to_string(),
            },
        };
        self.set(status)
    }

    /// Message confirming a successful submission.
    pub fn confirmation(&self) -> Option<String> {
        match &*self.status.borrow() {
            SubmissionStatus::Ok { email } => Some(format!(
                "Thanks, you're on our radar. We'll reply to {email} within 24 hours."
            )),
            _ => None,
        }
    }

    pub fn reset(&self) {
        self.set(SubmissionStatus::Idle);
    }

    fn set(&self, status: SubmissionStatus) -> SubmissionStatus {
        self.status.send_replace(status.clone());
        status
    }
}
