use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use url::Url;
use uuid::Uuid;

const EMAILS_ROUTE: &str = "/emails";

/// Recipients in this domain are refused with a validation error.
pub const REJECTED_DOMAIN: &str = "rejected.test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedEmail {
    #[serde(default)]
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<String>,
}

/// Emails accepted by the fake API.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<ReceivedEmail>>>);

impl Outbox {
    pub async fn emails(&self) -> Vec<ReceivedEmail> {
        self.0.lock().await.clone()
    }
}

/// A fake Resend API running in the background of the current tokio runtime.
pub struct FakeResend {
    pub url: Url,
    pub outbox: Outbox,
}

impl FakeResend {
    /// Binds to a random local port and serves the fake API until the
    /// runtime shuts down.
    pub async fn spawn(api_key: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        let outbox = Outbox::default();
        let router = router(api_key, outbox.clone());

        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self {
            url: format!("http://{addr}/").parse()?,
            outbox,
        })
    }
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend API endpoint: http://{host}:{port}/");
    info!("API key: {api_key:?}");
    info!("Recipients in the {REJECTED_DOMAIN:?} domain are rejected");

    let router = router(&api_key, Outbox::default());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

fn router(api_key: &str, outbox: Outbox) -> Router<()> {
    Router::new()
        .route(EMAILS_ROUTE, routing::post(send_email))
        .with_state(AppState {
            api_key: api_key.into(),
            outbox,
        })
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    outbox: Outbox,
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    name: &'static str,
    message: &'static str,
}

async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(mut email): Json<ReceivedEmail>,
) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == &*state.api_key);
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "validation_error", "API key is invalid");
    }

    let rejected = email
        .to
        .iter()
        .any(|to| to.trim_end_matches('>').ends_with(&format!("@{REJECTED_DOMAIN}")));
    if rejected {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "Invalid `to` field.",
        );
    }

    email.id = Uuid::new_v4().to_string();
    let id = email.id.clone();
    info!(id = %id, subject = %email.subject, to = ?email.to, "received email");
    state.outbox.0.lock().await.push(email);

    Json(SendEmailResponse { id }).into_response()
}

fn error(status: StatusCode, name: &'static str, message: &'static str) -> Response {
    let body = ErrorResponse {
        status_code: status.as_u16(),
        name,
        message,
    };
    (status, Json(body)).into_response()
}
