use tracing::{info, warn};
use warbuoy_config::Config;

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;
    match (&email, &config.contact.recipient) {
        (Some(_), Some(recipient)) => info!("Leads will be emailed to {recipient}"),
        (None, _) => warn!("No mail provider configured, leads will only be logged"),
        (_, None) => warn!("No lead recipient configured, leads will only be logged"),
    }

    let server = environment::rest_server(&config, email)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
