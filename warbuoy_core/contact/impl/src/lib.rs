use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use tracing::{debug, error, info, warn};
use warbuoy_core_contact_contracts::{
    ContactService, ContactSubmitError, Delivery, FallbackReason, FallbackRecord, LeadReceipt,
};
use warbuoy_email_contracts::{Email, EmailId, EmailService};
use warbuoy_models::{
    contact::{Lead, LeadSubmission},
    email_address::EmailAddressWithName,
};
use warbuoy_templates_contracts::TemplateService;

mod format;

#[cfg(test)]
mod tests;

/// Target of the log event that records a lead which was not emailed.
pub const FALLBACK_LOG_TARGET: &str = "warbuoy::contact::fallback";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    /// `None` if no mail provider is configured.
    email: Option<Email>,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Address that receives new leads. `None` puts the service into fallback mode.
    pub recipient: Option<Arc<EmailAddressWithName>>,
    pub subject_prefix: Arc<str>,
    pub send_timeout: Duration,
    pub preview_length: usize,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Option<Email>, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> Result<LeadReceipt, ContactSubmitError> {
        if submission.is_bot() {
            debug!("honeypot field filled in, ignoring submission");
            return Ok(LeadReceipt::Ignored);
        }

        let lead = Lead::from_submission(submission).map_err(|err| {
            debug!("rejected lead: {err}");
            ContactSubmitError::InvalidFields
        })?;

        let delivery = match (&self.email, &self.config.recipient) {
            (Some(email), Some(recipient)) => match self.dispatch(email, recipient, &lead).await {
                Ok(id) => {
                    info!(%id, "lead emailed");
                    Delivery::Delivered(id)
                }
                Err(err) => {
                    error!("Failed to email lead: {err:#}");
                    Delivery::LoggedFallback(self.fallback(FallbackReason::DispatchFailed, &lead))
                }
            },
            _ => {
                warn!("Mail provider or recipient not configured, logging lead instead");
                Delivery::LoggedFallback(self.fallback(FallbackReason::NotConfigured, &lead))
            }
        };

        Ok(LeadReceipt::Processed(delivery))
    }
}

impl<EmailS, TemplateS> ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn dispatch(
        &self,
        email_service: &EmailS,
        recipient: &EmailAddressWithName,
        lead: &Lead,
    ) -> anyhow::Result<EmailId> {
        let html = self
            .template
            .render(&format::template(lead))
            .context("Failed to render lead notification")?;

        let email = Email {
            recipient: recipient.clone(),
            subject: format::subject(&self.config.subject_prefix, &lead.name),
            text: format::text_body(lead),
            html,
            reply_to: lead.email.parse().ok(),
        };

        tokio::time::timeout(self.config.send_timeout, email_service.send(email))
            .await
            .map_err(|_| anyhow!("No answer after {:?}", self.config.send_timeout))?
            .map_err(Into::into)
    }

    fn fallback(&self, reason: FallbackReason, lead: &Lead) -> FallbackRecord {
        let record = FallbackRecord {
            reason,
            name: lead.name.to_string(),
            email: lead.email.to_string(),
            company: lead.company.as_deref().cloned().unwrap_or_default(),
            website: lead.website.as_ref().map(|w| w.to_string()).unwrap_or_default(),
            budget: lead.budget.as_deref().cloned().unwrap_or_default(),
            services: format::services(lead),
            message_preview: format::message_preview(&lead.message, self.config.preview_length),
        };

        info!(
            target: FALLBACK_LOG_TARGET,
            reason = %record.reason,
            name = ?record.name,
            email = ?record.email,
            company = ?record.company,
            website = ?record.website,
            budget = ?record.budget,
            services = ?record.services,
            message_preview = ?record.message_preview,
            "lead logged instead of emailed"
        );

        record
    }
}
