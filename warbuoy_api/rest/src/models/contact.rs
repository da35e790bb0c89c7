use serde::{Deserialize, Serialize};
use warbuoy_models::contact::LeadSubmission;

/// Body of a contact form submission.
///
/// Every field may be missing or `null`; required fields are validated by the
/// contact service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub services: Option<Vec<String>>,
    pub message: Option<String>,
    /// Honeypot. Hidden in the form and never filled in by humans.
    pub hp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactResponse {
    pub ok: bool,
    /// Absent for ignored submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emailed: Option<bool>,
}

impl From<ApiContactRequest> for LeadSubmission {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            company: value.company,
            website: value.website,
            budget: value.budget,
            services: value.services.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
            honeypot: value.hp,
        }
    }
}
