use warbuoy_core_contact_contracts::{ContactService, LeadReceipt};
use warbuoy_email_contracts::MockEmailService;
use warbuoy_models::contact::LeadSubmission;
use warbuoy_templates_contracts::MockTemplateService;

use crate::tests::{config, submission, Sut};

#[tokio::test]
async fn filled_honeypot_is_ignored() {
    // Arrange
    let sut = Sut::new(Some(MockEmailService::new()), MockTemplateService::new(), config());

    // Act
    let result = sut
        .submit_lead(LeadSubmission {
            honeypot: Some("spam".into()),
            ..submission()
        })
        .await;

    // Assert
    assert_eq!(result.unwrap(), LeadReceipt::Ignored);
}

#[tokio::test]
async fn filled_honeypot_skips_validation() {
    // Arrange
    let sut = Sut::new(Some(MockEmailService::new()), MockTemplateService::new(), config());

    // Act
    let result = sut
        .submit_lead(LeadSubmission {
            honeypot: Some("spam".into()),
            ..Default::default()
        })
        .await;

    // Assert
    assert_eq!(result.unwrap(), LeadReceipt::Ignored);
}
