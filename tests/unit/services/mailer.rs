//! Unit tests for message construction

use btc_dca_mailer::config::MailConfig;
use btc_dca_mailer::services::mailer::{build_message, is_auth_rejection, MailError, OutgoingMail};
use lettre::transport::smtp::response::{Category, Code, Detail, Severity};

fn mail_config(sender: &str) -> MailConfig {
    MailConfig {
        sender_email: sender.to_string(),
        sender_password: "app-password".to_string(),
        recipient_email: "you@example.com".to_string(),
        smtp_server: "smtp.example.com".to_string(),
        smtp_port: 587,
    }
}

fn report() -> OutgoingMail {
    OutgoingMail {
        subject: "BTC DCA TIME".to_string(),
        html_body: "<html><body><h2>No investment (0 EUR)</h2></body></html>".to_string(),
    }
}

#[test]
fn test_builds_html_message() {
    let message = build_message(&mail_config("me@example.com"), &report()).unwrap();
    let raw = String::from_utf8(message.formatted()).unwrap();

    assert!(raw.contains("Subject: BTC DCA TIME"));
    assert!(raw.contains("From: me@example.com"));
    assert!(raw.contains("To: you@example.com"));
    assert!(raw.contains("text/html"));
}

#[test]
fn test_invalid_sender_is_message_error() {
    let err = build_message(&mail_config("not an address"), &report()).unwrap_err();
    assert!(matches!(err, MailError::Message(_)));
}

#[test]
fn test_login_rejections_are_auth_failures() {
    // 535 5.7.8 and 534 5.7.9 (application-specific password required)
    let bad_credentials = Code::new(
        Severity::PermanentNegativeCompletion,
        Category::Unspecified3,
        Detail::Five,
    );
    let app_password_required = Code::new(
        Severity::PermanentNegativeCompletion,
        Category::Unspecified3,
        Detail::Four,
    );

    assert!(is_auth_rejection(bad_credentials));
    assert!(is_auth_rejection(app_password_required));
}

#[test]
fn test_other_smtp_codes_are_transport_failures() {
    let mailbox_unavailable = Code::new(
        Severity::PermanentNegativeCompletion,
        Category::MailSystem,
        Detail::Zero,
    );
    let service_unavailable = Code::new(
        Severity::TransientNegativeCompletion,
        Category::Connections,
        Detail::One,
    );

    assert!(!is_auth_rejection(mailbox_unavailable));
    assert!(!is_auth_rejection(service_unavailable));
}
