use std::{sync::LazyLock, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;
use warbuoy_utils::warbuoy_version;

use crate::ContactForm;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("Warbuoy Contact Client (Version {})", warbuoy_version()));

/// Submits contact forms to the lead endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    endpoint: Url,
    client: reqwest::Client,
}

/// Acknowledgment of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitAck {
    /// Absent if the service did not say whether the lead was emailed.
    pub emailed: Option<bool>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to send. Try again.")]
    Network(#[source] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Something went wrong.")]
    MalformedResponse,
}

const GENERIC_ERROR: &str = "Something went wrong.";

#[derive(Deserialize)]
struct OkBody {
    ok: bool,
    #[serde(default)]
    emailed: Option<bool>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ContactClient {
    /// `endpoint` is the full url of the contact route, e.g.
    /// `https://warbuoymarketing.ca/api/contact`.
    pub fn new(endpoint: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends exactly one request. The form is not validated here, see
    /// [`ContactForm::validate`].
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmitAck, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&form.payload())
            .send()
            .await
            .map_err(|err| {
                warn!("Failed to reach contact endpoint: {err}");
                SubmitError::Network(err)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(SubmitError::Network)?;
        debug!(%status, "contact endpoint responded");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error)
                .filter(|error| !error.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR.into());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_slice::<OkBody>(&body) {
            Ok(OkBody { ok: true, emailed }) => Ok(SubmitAck { emailed }),
            _ => Err(SubmitError::MalformedResponse),
        }
    }
}
