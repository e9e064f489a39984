use anyhow::Context;

use crate::configuration::ContactSettings;
use crate::domain::{ContactForm, ContactSubmission, Notification, SubmissionError};
use crate::email_client::EmailSender;

#[derive(thiserror::Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::routes::error_chain_fmt(self, f)
    }
}

/// Validates a submission and delivers both the owner notification and the
/// acknowledgement to the submitter.
///
/// The two dispatches run concurrently and both are awaited to completion,
/// whichever finishes first. The call succeeds only if both were accepted.
/// Nothing is sent when validation fails.
#[tracing::instrument(name = "Relaying a contact message", skip(sender, contact, form))]
pub async fn relay_contact_message(
    sender: &dyn EmailSender,
    contact: &ContactSettings,
    form: ContactForm,
) -> Result<(), RelayError> {
    let submission = ContactSubmission::try_from(form)?;

    let owner_notification = Notification::owner_notification(&submission, contact);
    let acknowledgement = Notification::acknowledgement(&submission, contact);

    let (owner_result, acknowledgement_result) = tokio::join!(
        sender.send(&owner_notification),
        sender.send(&acknowledgement),
    );
    owner_result.context("Failed to deliver the owner notification")?;
    acknowledgement_result.context("Failed to deliver the acknowledgement to the submitter")?;

    Ok(())
}
