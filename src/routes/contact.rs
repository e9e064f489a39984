use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use anyhow::Context;
use futures::StreamExt;

use crate::{
    configuration::ContactSettings,
    domain::{ContactForm, SubmissionError},
    email_client::EmailSender,
    relay::{relay_contact_message, RelayError},
    routes::error_chain_fmt,
};

/// Bodies above this size are refused with the generic failure response.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(serde::Serialize)]
struct SuccessBody {
    success: bool,
    message: &'static str,
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(SubmissionError),
    #[error("Failed to send email. Please try again or contact directly via phone/email.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<RelayError> for ContactError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Validation(e) => ContactError::ValidationError(e),
            RelayError::Unexpected(e) => ContactError::UnexpectedError(e),
        }
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(payload, email_sender, contact),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty
    )
)]
pub async fn contact(
    payload: web::Payload,
    email_sender: web::Data<dyn EmailSender>,
    contact: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let body = read_body(payload).await.map_err(log_unexpected)?;
    let form = ContactForm::from_json(&body)
        .context("Failed to parse the contact form body")
        .map_err(log_unexpected)?;

    let span = tracing::Span::current();
    if let Some(email) = &form.email {
        span.record("submitter_email", &tracing::field::display(email));
    }
    if let Some(name) = &form.name {
        span.record("submitter_name", &tracing::field::display(name));
    }

    relay_contact_message(email_sender.get_ref(), &contact, form)
        .await
        .map_err(|e| match e {
            RelayError::Unexpected(e) => log_unexpected(e),
            e => e.into(),
        })?;

    Ok(HttpResponse::Ok().json(SuccessBody {
        success: true,
        message: "Email sent successfully! You will receive a confirmation email shortly.",
    }))
}

async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, anyhow::Error> {
    let mut body = web::BytesMut::new();
    let mut received = 0;
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.context("Failed to read the request body")?;
        received += chunk.len();
        // Oversized bodies are drained without being buffered.
        if received <= MAX_BODY_BYTES {
            body.extend_from_slice(&chunk);
        }
    }
    if received > MAX_BODY_BYTES {
        anyhow::bail!("Request body of {} bytes exceeds {} bytes", received, MAX_BODY_BYTES);
    }
    Ok(body)
}

/// The cause chain only ever reaches the logs; the caller gets the generic message.
fn log_unexpected(e: anyhow::Error) -> ContactError {
    tracing::error!(error.cause_chain = ?e, "Email sending failed");
    ContactError::UnexpectedError(e)
}
