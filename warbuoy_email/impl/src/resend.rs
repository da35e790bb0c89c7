use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use warbuoy_email_contracts::{Email, EmailId, EmailSendError, EmailService};
use warbuoy_models::email_address::EmailAddressWithName;

use crate::http::HttpClient;

pub const RESEND_API_ENDPOINT: &str = "https://api.resend.com/";

/// Sends emails through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendEmailService {
    from: Arc<EmailAddressWithName>,
    api_key: Arc<str>,
    emails_endpoint: Arc<Url>,
    client: HttpClient,
}

impl ResendEmailService {
    /// `endpoint` is the base url of the API and should end with a `/`.
    pub fn new(
        from: EmailAddressWithName,
        api_key: impl Into<Arc<str>>,
        endpoint: &Url,
    ) -> anyhow::Result<Self> {
        let emails_endpoint = endpoint
            .join("emails")
            .with_context(|| format!("Invalid Resend API endpoint {endpoint}"))?;

        Ok(Self {
            from: from.into(),
            api_key: api_key.into(),
            emails_endpoint: emails_endpoint.into(),
            client: HttpClient::new()?,
        })
    }
}

impl EmailService for ResendEmailService {
    async fn send(&self, email: Email) -> Result<EmailId, EmailSendError> {
        let recipient = email.recipient.to_string();
        let request = SendEmailRequest {
            from: self.from.to_string(),
            to: [recipient.as_str()],
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
            reply_to: email.reply_to.as_ref().map(|reply_to| reply_to.as_str()),
        };

        let response = self
            .client
            .post((*self.emails_endpoint).clone())
            .bearer_auth(&*self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the Resend API")?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { message }) => message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").into(),
            };
            debug!(%status, %message, "Resend API rejected email");
            return Err(EmailSendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let SendEmailResponse { id } = response
            .json()
            .await
            .context("Failed to parse Resend API response")?;

        Ok(EmailId(id))
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}
