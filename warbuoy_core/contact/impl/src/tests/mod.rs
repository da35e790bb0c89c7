use std::{sync::Arc, time::Duration};

use warbuoy_email_contracts::{Email, MockEmailService};
use warbuoy_models::contact::LeadSubmission;
use warbuoy_templates_contracts::{LeadNotificationTemplate, MockTemplateService};

use crate::{ContactServiceConfig, ContactServiceImpl};

mod honeypot;

type Sut = ContactServiceImpl<MockEmailService, MockTemplateService>;

const RENDERED: &str = "<p>rendered</p>";

fn config() -> ContactServiceConfig {
    ContactServiceConfig {
        recipient: Some(Arc::new("Warbuoy <leads@warbuoy.test>".parse().unwrap())),
        subject_prefix: "New Warbuoy lead".into(),
        send_timeout: Duration::from_secs(10),
        preview_length: 300,
    }
}

fn submission() -> LeadSubmission {
    LeadSubmission {
        name: "  Max Mustermann ".into(),
        email: "max.mustermann@example.de".into(),
        company: Some("Mustermann & Co".into()),
        website: Some("mustermann.de".into()),
        budget: Some("$2k–$5k/mo".into()),
        services: vec!["Ads".into(), " Ads ".into(), "Creative".into(), "".into()],
        message: "Hello World!".into(),
        honeypot: Some("   ".into()),
    }
}

fn template() -> LeadNotificationTemplate {
    LeadNotificationTemplate {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        company: Some("Mustermann & Co".into()),
        website: Some("https://mustermann.de/".into()),
        budget: Some("$2k–$5k/mo".into()),
        services: Some("Ads, Creative".into()),
        message: "Hello World!".into(),
    }
}

fn email() -> Email {
    Email {
        recipient: "Warbuoy <leads@warbuoy.test>".parse().unwrap(),
        subject: "New Warbuoy lead - Max Mustermann".into(),
        text: "Name: Max Mustermann\n\
               Email: max.mustermann@example.de\n\
               Company: Mustermann & Co\n\
               Website: https://mustermann.de/\n\
               Budget: $2k–$5k/mo\n\
               Services: Ads, Creative\n\
               \n\
               Hello World!"
            .into(),
        html: RENDERED.into(),
        reply_to: Some("max.mustermann@example.de".parse().unwrap()),
    }
}
