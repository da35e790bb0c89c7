use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::Value;
use tracing::{debug, Instrument};
use warbuoy_core_contact_contracts::{ContactService, ContactSubmitError, LeadReceipt};

use super::{error, internal_server_error};
use crate::models::contact::{ApiContactRequest, ApiContactResponse};

pub fn router<S: ContactService>(service: Arc<S>, expose_error_details: bool) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit_lead::<S>))
        .with_state(ContactState {
            service,
            expose_error_details,
        })
}

struct ContactState<S> {
    service: Arc<S>,
    expose_error_details: bool,
}

impl<S> Clone for ContactState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            expose_error_details: self.expose_error_details,
        }
    }
}

async fn submit_lead<S: ContactService>(
    State(state): State<ContactState<S>>,
    body: Bytes,
) -> Response {
    let request = match parse_request(&body) {
        Ok(Some(request)) => request,
        Ok(None) => {
            debug!("honeypot field filled in, ignoring contact request");
            return Json(ApiContactResponse {
                ok: true,
                emailed: None,
            })
            .into_response();
        }
        Err(err) => return internal_server_error(err, state.expose_error_details),
    };

    // Once the request is valid the submission is processed to completion, even
    // if the client goes away in the meantime.
    let service = Arc::clone(&state.service);
    let result = tokio::spawn(
        async move { service.submit_lead(request.into()).await }
            .instrument(tracing::Span::current()),
    )
    .await;

    match result {
        Ok(Ok(LeadReceipt::Ignored)) => Json(ApiContactResponse {
            ok: true,
            emailed: None,
        })
        .into_response(),
        Ok(Ok(LeadReceipt::Processed(delivery))) => Json(ApiContactResponse {
            ok: true,
            emailed: Some(delivery.emailed()),
        })
        .into_response(),
        Ok(Err(err @ ContactSubmitError::InvalidFields)) => {
            debug!("rejecting contact request: {err}");
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Ok(Err(ContactSubmitError::Other(err))) => {
            internal_server_error(err, state.expose_error_details)
        }
        Err(err) => internal_server_error(err, state.expose_error_details),
    }
}

/// Parses the request body, returning `None` for bot submissions.
///
/// The honeypot is checked before the remaining fields are typed, so a filled
/// honeypot is acknowledged no matter what else the body contains.
fn parse_request(body: &[u8]) -> anyhow::Result<Option<ApiContactRequest>> {
    let value =
        serde_json::from_slice::<Value>(body).context("Failed to parse contact request")?;

    let honeypot = value.get("hp").and_then(Value::as_str);
    if honeypot.is_some_and(|hp| !hp.trim().is_empty()) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .context("Failed to parse contact request")
}
