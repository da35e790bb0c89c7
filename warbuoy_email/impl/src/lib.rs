use warbuoy_email_contracts::{Email, EmailId, EmailSendError, EmailService};

pub mod http;
pub mod resend;
pub mod smtp;

use resend::ResendEmailService;
use smtp::SmtpEmailService;

/// The mail provider selected by configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Resend(ResendEmailService),
    Smtp(SmtpEmailService),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<EmailId, EmailSendError> {
        match self {
            Self::Resend(resend) => resend.send(email).await,
            Self::Smtp(smtp) => smtp.send(email).await,
        }
    }
}

impl From<ResendEmailService> for EmailServiceImpl {
    fn from(value: ResendEmailService) -> Self {
        Self::Resend(value)
    }
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}
