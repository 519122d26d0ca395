//! Unit tests for the logging email service and the notifier adapter

use radar_core::NotifierTrait;

use crate::notifier::{EmailMessage, EmailNotifier, EmailService, LogEmailService};

#[tokio::test]
async fn test_send_counts_messages() {
    let service = LogEmailService::new();

    let id = service
        .send_email(&EmailMessage::verification("user@x.com", "123456", 10))
        .await
        .unwrap();

    assert!(id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
}

#[tokio::test]
async fn test_simulated_failure() {
    let service = LogEmailService::new();
    service.set_simulate_failure(true);

    let result = service.send_verification_code("user@x.com", "123456", 10).await;
    assert!(result.is_err());
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let service = LogEmailService::new();
    let notifier = EmailNotifier::new(Box::new(service.clone()));
    assert_eq!(notifier.provider_name(), "mock");

    assert!(notifier
        .send_verification_code("user@x.com", "654321", 10)
        .await
        .is_ok());

    service.set_simulate_failure(true);
    let err = notifier
        .send_verification_code("user@x.com", "654321", 10)
        .await
        .unwrap_err();
    assert!(err.contains("Simulated"));
    assert_eq!(service.get_message_count(), 1);
}
