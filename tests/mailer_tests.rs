use tresor_portal::{
    mailer::{Mailer, MockMailer, contact_body, contact_subject},
    models::ContactRequest,
};

fn request(phone: Option<&str>) -> ContactRequest {
    ContactRequest {
        name: " Awa Diop ".to_string(),
        email: "awa@example.com".to_string(),
        phone: phone.map(str::to_string),
        subject: " Émission BTA ".to_string(),
        message: "Bonjour, quelle est la prochaine date ?".to_string(),
    }
}

#[test]
fn test_contact_subject_is_prefixed() {
    assert_eq!(contact_subject(&request(None)), "[Contact] Émission BTA");
}

#[test]
fn test_contact_body_lists_sender() {
    let body = contact_body(&request(Some("+221 77 000 00 00")));

    assert!(body.starts_with("Nom: Awa Diop\n"));
    assert!(body.contains("E-mail: awa@example.com"));
    assert!(body.contains("Téléphone: +221 77 000 00 00"));
    assert!(body.ends_with("quelle est la prochaine date ?"));
}

#[test]
fn test_contact_body_without_phone() {
    let body = contact_body(&request(None));
    assert!(body.contains("Téléphone: -"));
}

#[tokio::test]
async fn test_mock_mailer_records_and_fails() {
    let mailer = MockMailer::new();
    mailer.send_contact(&request(None)).await.unwrap();
    assert_eq!(mailer.sent().len(), 1);

    let failing = MockMailer::new_failing();
    assert!(failing.send_contact(&request(None)).await.is_err());
    assert!(failing.sent().is_empty());
}
