use std::net::IpAddr;

use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use warbuoy_core_contact_contracts::ContactService;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Append error details to generic server errors.
    pub expose_error_details: bool,
    /// Maximum accepted request body size in bytes.
    pub max_body_size: usize,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self { contact, config }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(
                self.contact.into(),
                self.config.expose_error_details,
            ))
            .layer(DefaultBodyLimit::max(self.config.max_body_size));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
