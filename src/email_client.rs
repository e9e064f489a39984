use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

use crate::domain::{ContactEmail, Notification};

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("Failed to reach the email delivery service")]
    Transport(#[from] reqwest::Error),
    #[error("The email delivery service rejected the message with status {0}")]
    Rejected(StatusCode),
}

/// Anything able to hand a [`Notification`] over for delivery.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// Sends email through a Postmark-compatible HTTP API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ContactEmail,
    authorization_token: Secret<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }
}

#[async_trait]
impl EmailSender for EmailClient {
    #[tracing::instrument(
        name = "Dispatching an email",
        skip(self, notification),
        fields(recipient = %notification.to, subject = %notification.subject)
    )]
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: notification.to.as_ref(),
            reply_to: notification.reply_to.as_ref().map(AsRef::as_ref),
            subject: &notification.subject,
            html_body: &notification.html_body,
            text_body: &notification.text_body,
        };

        let response = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status));
        }
        Ok(())
    }
}
