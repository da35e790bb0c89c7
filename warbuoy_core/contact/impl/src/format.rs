use warbuoy_models::contact::{Lead, LeadName};
use warbuoy_templates_contracts::LeadNotificationTemplate;

pub fn subject(prefix: &str, name: &LeadName) -> String {
    let name = name
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>();
    format!("{prefix} - {name}")
}

pub fn services(lead: &Lead) -> String {
    lead.services
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain text body: one `Label: value` line per present field, then a blank
/// line and the message.
pub fn text_body(lead: &Lead) -> String {
    let mut lines = vec![
        format!("Name: {}", lead.name),
        format!("Email: {}", lead.email),
    ];
    if let Some(company) = &lead.company {
        lines.push(format!("Company: {company}"));
    }
    if let Some(website) = &lead.website {
        lines.push(format!("Website: {website}"));
    }
    if let Some(budget) = &lead.budget {
        lines.push(format!("Budget: {budget}"));
    }
    if !lead.services.is_empty() {
        lines.push(format!("Services: {}", services(lead)));
    }
    lines.push(String::new());
    lines.push(lead.message.to_string());
    lines.join("\n")
}

pub fn template(lead: &Lead) -> LeadNotificationTemplate {
    LeadNotificationTemplate {
        name: lead.name.to_string(),
        email: lead.email.to_string(),
        company: lead.company.as_deref().cloned(),
        website: lead.website.as_ref().map(ToString::to_string),
        budget: lead.budget.as_deref().cloned(),
        services: (!lead.services.is_empty()).then(|| services(lead)),
        message: lead.message.to_string(),
    }
}

pub fn message_preview(message: &str, length: usize) -> String {
    match message.char_indices().nth(length) {
        Some((end, _)) => format!("{}…", &message[..end]),
        None => message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use warbuoy_models::contact::LeadSubmission;

    use super::*;

    fn lead() -> Lead {
        Lead::from_submission(LeadSubmission {
            name: "Max <Mustermann>".into(),
            email: "max.mustermann@example.de".into(),
            company: Some("Mustermann & Co".into()),
            website: Some("mustermann.de".into()),
            budget: Some("$5k–$10k/mo".into()),
            services: vec!["Ads".into(), "Funnels".into()],
            message: "Hello World!\n<script>alert(1)</script>".into(),
            honeypot: None,
        })
        .unwrap()
    }

    #[test]
    fn text_body_all_fields() {
        assert_eq!(
            text_body(&lead()),
            "Name: Max <Mustermann>\n\
             Email: max.mustermann@example.de\n\
             Company: Mustermann & Co\n\
             Website: https://mustermann.de/\n\
             Budget: $5k–$10k/mo\n\
             Services: Ads, Funnels\n\
             \n\
             Hello World!\n<script>alert(1)</script>"
        );
    }

    #[test]
    fn text_body_required_fields_only() {
        let lead = Lead {
            company: None,
            website: None,
            budget: None,
            services: Vec::new(),
            ..lead()
        };
        assert_eq!(
            text_body(&lead),
            "Name: Max <Mustermann>\n\
             Email: max.mustermann@example.de\n\
             \n\
             Hello World!\n<script>alert(1)</script>"
        );
    }

    #[test]
    fn template_carries_raw_values() {
        assert_eq!(
            template(&lead()),
            LeadNotificationTemplate {
                name: "Max <Mustermann>".into(),
                email: "max.mustermann@example.de".into(),
                company: Some("Mustermann & Co".into()),
                website: Some("https://mustermann.de/".into()),
                budget: Some("$5k–$10k/mo".into()),
                services: Some("Ads, Funnels".into()),
                message: "Hello World!\n<script>alert(1)</script>".into(),
            }
        );
    }

    #[test]
    fn subject_collapses_control_characters() {
        let name = LeadName::try_new("Jo\r\nBcc: x@y.z").unwrap();
        assert_eq!(subject("New Warbuoy lead", &name), "New Warbuoy lead - Jo  Bcc: x@y.z");
    }

    #[test]
    fn preview() {
        assert_eq!(message_preview("Hi", 300), "Hi");
        assert_eq!(message_preview(&"a".repeat(300), 300), "a".repeat(300));
        assert_eq!(
            message_preview(&"ä".repeat(301), 300),
            format!("{}…", "ä".repeat(300))
        );
    }
}
