use anyhow::{bail, Context};
use url::Url;
use warbuoy_config::EmailConfig;
use warbuoy_email_impl::{
    resend::{ResendEmailService, RESEND_API_ENDPOINT},
    smtp::SmtpEmailService,
    EmailServiceImpl,
};

/// Set up the configured mail provider. Returns `None` if there is none.
pub fn connect(config: &EmailConfig) -> anyhow::Result<Option<EmailServiceImpl>> {
    match (&config.resend, &config.smtp) {
        (Some(_), Some(_)) => {
            bail!("Both email.resend and email.smtp are configured, choose one of them")
        }
        (Some(resend), None) => {
            let endpoint = match &resend.endpoint {
                Some(endpoint) => endpoint.clone(),
                None => Url::parse(RESEND_API_ENDPOINT)?,
            };
            let service =
                ResendEmailService::new(config.from.clone(), resend.api_key.as_str(), &endpoint)
                    .context("Failed to set up Resend client")?;
            Ok(Some(service.into()))
        }
        (None, Some(smtp)) => {
            let service = SmtpEmailService::new(smtp.url.as_str(), config.from.clone())
                .context("Failed to set up SMTP transport")?;
            Ok(Some(service.into()))
        }
        (None, None) => Ok(None),
    }
}
