use std::time::Duration;

use anyhow::bail;
use clap::{builder::PossibleValuesParser, Args};
use url::Url;
use warbuoy_client::{ContactClient, ContactForm, ContactFormState, SubmissionStatus};
use warbuoy_models::contact::{BUDGET_OPTIONS, SERVICE_OPTIONS};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Url of the contact endpoint
    #[arg(long, default_value = "http://127.0.0.1:8000/api/contact")]
    endpoint: Url,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(BUDGET_OPTIONS.iter().copied())
    )]
    budget: Option<String>,
    /// May be given multiple times
    #[arg(
        long = "service",
        value_parser = PossibleValuesParser::new(SERVICE_OPTIONS.iter().copied())
    )]
    services: Vec<String>,
}

impl SubmitCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        let client = ContactClient::new(self.endpoint, Duration::from_secs(self.timeout))?;
        let form = ContactForm {
            name: self.name,
            email: self.email,
            company: self.company.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            budget: self.budget.unwrap_or_default(),
            services: self.services,
            message: self.message,
            honeypot: String::new(),
        };

        let state = ContactFormState::new();
        eprintln!("Sending...");
        match state.submit(&client, &form).await {
            SubmissionStatus::Ok { .. } => {
                if let Some(confirmation) = state.confirmation() {
                    println!("{confirmation}");
                }
                Ok(())
            }
            SubmissionStatus::Error { message } => bail!(message),
            status => bail!("Unexpected submission status {status:?}"),
        }
    }
}
