use std::sync::Arc;

use warbuoy_api_rest::{RestServer, RestServerConfig};
use warbuoy_config::Config;
use warbuoy_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use warbuoy_email_impl::EmailServiceImpl;
use warbuoy_templates_impl::TemplateServiceImpl;

pub type ContactService = ContactServiceImpl<EmailServiceImpl, TemplateServiceImpl>;
pub type Server = RestServer<ContactService>;

pub fn contact_service(
    config: &Config,
    email: Option<EmailServiceImpl>,
) -> anyhow::Result<ContactService> {
    let template = TemplateServiceImpl::new()?;
    let contact_config = ContactServiceConfig {
        recipient: config.contact.recipient.clone().map(Arc::new),
        subject_prefix: config.contact.subject_prefix.as_str().into(),
        send_timeout: config.email.send_timeout.into(),
        preview_length: config.contact.preview_length,
    };
    Ok(ContactServiceImpl::new(email, template, contact_config))
}

pub fn rest_server(config: &Config, email: Option<EmailServiceImpl>) -> anyhow::Result<Server> {
    let contact = contact_service(config, email)?;
    let rest_config = RestServerConfig {
        expose_error_details: config.http.expose_error_details,
        max_body_size: config.http.max_body_size,
    };
    Ok(RestServer::new(contact, rest_config))
}
