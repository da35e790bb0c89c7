use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::bounded;

pub static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Budget buckets offered by the contact form.
pub const BUDGET_OPTIONS: &[&str] = &["< $2k/mo", "$2k–$5k/mo", "$5k–$10k/mo", "$10k+/mo"];

/// Services offered by the contact form.
pub const SERVICE_OPTIONS: &[&str] = &["Ads", "Funnels", "Creative", "Email/SMS"];

pub const MAX_SERVICES: usize = 10;
pub const MAX_WEBSITE_LEN: usize = 2048;

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(value)
}

/// A contact form submission exactly as received from the caller.
///
/// Nothing in here has been trimmed, bounded or validated yet. Missing
/// required fields are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub services: Vec<String>,
    pub message: String,
    pub honeypot: Option<String>,
}

impl LeadSubmission {
    /// Whether the hidden honeypot field has been filled in.
    pub fn is_bot(&self) -> bool {
        self.honeypot
            .as_deref()
            .is_some_and(|honeypot| !honeypot.trim().is_empty())
    }
}

#[nutype(
    sanitize(with = |s: String| bounded(s, 120)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadName(String);

#[nutype(
    sanitize(with = |s: String| bounded(s, 160)),
    validate(not_empty, regex = EMAIL_SHAPE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadEmail(String);

#[nutype(
    sanitize(with = |s: String| bounded(s, 160)),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadCompany(String);

#[nutype(
    sanitize(with = |s: String| bounded(s, 40)),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadBudget(String);

#[nutype(
    sanitize(with = |s: String| bounded(s, 40)),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadServiceTag(String);

#[nutype(
    sanitize(with = |s: String| bounded(s, 5000)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct LeadMessage(String);

/// A sanitized and validated lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub company: Option<LeadCompany>,
    pub website: Option<Url>,
    pub budget: Option<LeadBudget>,
    pub services: Vec<LeadServiceTag>,
    pub message: LeadMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeadValidationError {
    #[error("Name is required.")]
    MissingName,
    #[error("A valid email address is required.")]
    InvalidEmail,
    #[error("Message is required.")]
    MissingMessage,
}

impl Lead {
    /// Sanitizes every field of the submission and validates the required ones.
    ///
    /// The honeypot field is not looked at.
    pub fn from_submission(submission: LeadSubmission) -> Result<Self, LeadValidationError> {
        let LeadSubmission {
            name,
            email,
            company,
            website,
            budget,
            services,
            message,
            honeypot: _,
        } = submission;

        let name = LeadName::try_new(name).map_err(|_| LeadValidationError::MissingName)?;
        let email = LeadEmail::try_new(email).map_err(|_| LeadValidationError::InvalidEmail)?;
        let message =
            LeadMessage::try_new(message).map_err(|_| LeadValidationError::MissingMessage)?;

        let company = company.map(LeadCompany::new).filter(|c| !c.is_empty());
        let website = website.as_deref().and_then(normalize_website);
        let budget = budget.map(LeadBudget::new).filter(|b| !b.is_empty());

        let mut tags = Vec::new();
        for tag in services.into_iter().map(LeadServiceTag::new) {
            if tags.len() == MAX_SERVICES {
                break;
            }
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Self {
            name,
            email,
            company,
            website,
            budget,
            services: tags,
            message,
        })
    }
}

impl From<Lead> for LeadSubmission {
    fn from(value: Lead) -> Self {
        Self {
            name: value.name.into_inner(),
            email: value.email.into_inner(),
            company: value.company.map(LeadCompany::into_inner),
            website: value.website.map(String::from),
            budget: value.budget.map(LeadBudget::into_inner),
            services: value
                .services
                .into_iter()
                .map(LeadServiceTag::into_inner)
                .collect(),
            message: value.message.into_inner(),
            honeypot: None,
        }
    }
}

/// Turns user input like `example.com` into an absolute `http(s)` url.
///
/// Returns `None` for anything that does not end up as a parseable url with a
/// host, which callers treat as "no website given".
pub fn normalize_website(value: &str) -> Option<Url> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > MAX_WEBSITE_LEN {
        return None;
    }

    let has_scheme = ["http://", "https://"].iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    });

    let url = if has_scheme {
        Url::parse(value)
    } else {
        Url::parse(&format!("https://{value}"))
    }
    .ok()?;

    (matches!(url.scheme(), "http" | "https")
        && url.host().is_some()
        && url.as_str().chars().count() <= MAX_WEBSITE_LEN)
        .then_some(url)
}
