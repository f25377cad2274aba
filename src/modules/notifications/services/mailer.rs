use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::notifications::models::EmailTemplate;

/// Email delivery collaborator. Returns whether the provider accepted the
/// message; transport-level failures surface as errors.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<bool>;
}

/// SendGrid v3 mail client with transient-error retries
pub struct SendGridMailer {
    client: ClientWithMiddleware,
    api_key: String,
    from_email: String,
    base_url: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, from_email: String) -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Self {
            client,
            api_key,
            from_email,
            base_url: "https://api.sendgrid.com".to_string(),
        }
    }
}

#[derive(Serialize)]
struct MailRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    content: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
    subject: &'a str,
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[async_trait]
impl EmailSender for SendGridMailer {
    async fn send(&self, to: &str, template: &EmailTemplate) -> Result<bool> {
        // SendGrid Mail Send API: https://api.sendgrid.com/v3/mail/send
        let url = format!("{}/v3/mail/send", self.base_url);

        // plain text part must precede HTML per the API's content ordering
        let request = MailRequest {
            personalizations: vec![Personalization {
                to: vec![Address { email: to }],
                subject: &template.subject,
            }],
            from: Address {
                email: &self.from_email,
            },
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &template.text,
                },
                Content {
                    content_type: "text/html",
                    value: &template.html,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::email(format!("SendGrid request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "SendGrid rejected the message");
            return Ok(false);
        }

        Ok(true)
    }
}
