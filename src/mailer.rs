use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::models::ContactRequest;

/// Mailer
///
/// Outbound contact-form delivery through the transactional email provider.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, request: &ContactRequest) -> Result<(), String>;
}

/// Email payload accepted by the provider's `POST /emails` endpoint.
#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    text: String,
}

/// HttpMailer
///
/// `Mailer` backed by the provider's JSON HTTP API with a bearer API key.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
    recipient: String,
}

impl HttpMailer {
    pub fn new(api_url: &str, api_key: &str, from: &str, recipient: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            from: from.to_string(),
            recipient: recipient.to_string(),
        }
    }
}

pub fn contact_subject(request: &ContactRequest) -> String {
    format!("[Contact] {}", request.subject.trim())
}

pub fn contact_body(request: &ContactRequest) -> String {
    format!(
        "Nom: {}\nE-mail: {}\nTéléphone: {}\n\n{}",
        request.name.trim(),
        request.email.trim(),
        request.phone.as_deref().unwrap_or("-"),
        request.message.trim()
    )
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_contact(&self, request: &ContactRequest) -> Result<(), String> {
        let email = OutboundEmail {
            from: &self.from,
            to: [&self.recipient],
            reply_to: &request.email,
            subject: contact_subject(request),
            text: contact_body(request),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("email provider returned {}: {}", status, detail));
        }
        Ok(())
    }
}

/// MockMailer
///
/// Test double for `Mailer`: records every message, or fails on demand.
#[derive(Clone, Default)]
pub struct MockMailer {
    pub should_fail: bool,
    sent: Arc<Mutex<Vec<ContactRequest>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactRequest> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_contact(&self, request: &ContactRequest) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Mailer Error: Simulation requested".to_string());
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request.clone());
        }
        Ok(())
    }
}

pub type MailerState = Arc<dyn Mailer>;
