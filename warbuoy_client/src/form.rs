use serde::Serialize;
use thiserror::Error;
use warbuoy_models::contact::is_email_shaped;

/// Raw values of the contact form. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub budget: String,
    pub services: Vec<String>,
    pub message: String,
    /// Hidden field, left empty by humans.
    pub honeypot: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name, email, and a short message are required.")]
    MissingRequired,
    #[error("Enter a valid email.")]
    InvalidEmail,
}

impl ContactForm {
    /// Checks the required fields the same way the contact service does.
    pub fn validate(&self) -> Result<(), FormError> {
        let (name, email, message) = (
            self.name.trim(),
            self.email.trim(),
            self.message.trim(),
        );
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingRequired);
        }
        if !is_email_shaped(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub(crate) fn payload(&self) -> ContactPayload<'_> {
        fn optional(value: &str) -> Option<&str> {
            Some(value.trim()).filter(|value| !value.is_empty())
        }

        ContactPayload {
            name: self.name.trim(),
            email: self.email.trim(),
            company: optional(&self.company),
            website: optional(&self.website),
            budget: optional(&self.budget),
            services: &self.services,
            message: self.message.trim(),
            hp: &self.honeypot,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a str>,
    services: &'a [String],
    message: &'a str,
    hp: &'a str,
}
