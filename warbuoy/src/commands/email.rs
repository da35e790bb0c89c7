use anyhow::Context;
use clap::Subcommand;
use tracing::info;
use warbuoy_config::Config;
use warbuoy_email_contracts::{Email, EmailService};
use warbuoy_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?
        .context("No mail provider configured, set up email.resend or email.smtp")?;

    let id = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            text: "Email deliverability seems to be working!".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            reply_to: None,
        })
        .await
        .context("Failed to send email")?;

    info!(%id, "Test email sent");

    Ok(())
}
