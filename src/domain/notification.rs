use crate::configuration::ContactSettings;

use super::{ContactEmail, ContactSubmission};

/// One outbound email derived from a [`ContactSubmission`].
/// The sender address is filled in by the email client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub to: ContactEmail,
    pub reply_to: Option<ContactEmail>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl Notification {
    /// The copy of the submission delivered to the site owner.
    pub fn owner_notification(submission: &ContactSubmission, contact: &ContactSettings) -> Self {
        let name = submission.name.as_ref();
        let email = submission.email.as_ref();
        let message = submission.message.as_ref();

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: #0077b6; color: white; padding: 30px; text-align: center;">
    <h1 style="margin: 0; font-size: 24px;">New Portfolio Contact Message</h1>
    <p style="margin: 10px 0 0;">From {owner}'s Portfolio</p>
  </div>
  <div style="padding: 30px; background: #f8fafc; border-left: 4px solid #0077b6;">
    <p style="margin: 0 0 8px; color: #64748b; font-weight: bold;">NAME</p>
    <p style="margin: 0 0 15px;">{name}</p>
    <p style="margin: 0 0 8px; color: #64748b; font-weight: bold;">EMAIL</p>
    <p style="margin: 0 0 15px;">{email}</p>
    <p style="margin: 0 0 8px; color: #64748b; font-weight: bold;">MESSAGE</p>
    <p style="margin: 0; line-height: 1.6;">{message}</p>
  </div>
  <div style="padding: 20px; background: #1e293b; text-align: center; color: #94a3b8;">
    This message was sent from your portfolio contact form<br>
    {owner} - {title}
  </div>
</div>"#,
            owner = contact.owner_name,
            title = contact.owner_title,
        );
        let text_body = format!(
            "New portfolio contact message\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n",
            name, email, message
        );

        Self {
            to: contact.recipient_email.clone(),
            reply_to: Some(submission.email.clone()),
            subject: format!("Message from portfolio: {}", name),
            html_body,
            text_body,
        }
    }

    /// The thank-you note sent back to whoever filled in the form.
    pub fn acknowledgement(submission: &ContactSubmission, contact: &ContactSettings) -> Self {
        let name = submission.name.as_ref();
        let message = submission.message.as_ref();

        let mut details_html = format!(
            r#"<p style="margin: 5px 0;">Email: {}</p>"#,
            contact.recipient_email
        );
        let mut details_text = format!("Email: {}\n", contact.recipient_email);
        if let Some(phone) = &contact.owner_phone {
            details_html.push_str(&format!(r#"<p style="margin: 5px 0;">Phone: {}</p>"#, phone));
            details_text.push_str(&format!("Phone: {}\n", phone));
        }
        if let Some(location) = &contact.owner_location {
            details_html.push_str(&format!(
                r#"<p style="margin: 5px 0;">Location: {}</p>"#,
                location
            ));
            details_text.push_str(&format!("Location: {}\n", location));
        }

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: #0077b6; color: white; padding: 30px; text-align: center;">
    <h1 style="margin: 0; font-size: 24px;">Thank You for Your Message!</h1>
    <p style="margin: 10px 0 0;">{owner} - {title}</p>
  </div>
  <div style="padding: 30px;">
    <h2 style="color: #1e293b; margin: 0 0 20px;">Hello {name},</h2>
    <p style="color: #64748b; line-height: 1.6;">Thank you for reaching out through my portfolio website. I have received your message and appreciate your interest.</p>
    <div style="background: #f8fafc; padding: 20px; border-left: 4px solid #0077b6; margin: 20px 0;">
      <h3 style="margin: 0 0 15px;">Your Message:</h3>
      <p style="color: #64748b; font-style: italic; margin: 0;">"{message}"</p>
    </div>
    <p style="color: #64748b; line-height: 1.6;">I will review your message and get back to you as soon as possible.</p>
    <div style="background: #0077b6; color: white; padding: 20px; margin: 20px 0;">
      <h3 style="margin: 0 0 15px;">Contact Information:</h3>
      {details_html}
    </div>
    <p style="color: #64748b;">Best regards,<br><strong>{owner}</strong><br>{title}</p>
  </div>
</div>"#,
            owner = contact.owner_name,
            title = contact.owner_title,
        );
        let text_body = format!(
            "Hello {name},\n\nThank you for reaching out through my portfolio website. \
             I have received your message and appreciate your interest.\n\n\
             Your message:\n\"{message}\"\n\n\
             I will review your message and get back to you as soon as possible.\n\n\
             {details_text}\nBest regards,\n{owner}\n{title}\n",
            owner = contact.owner_name,
            title = contact.owner_title,
        );

        Self {
            to: submission.email.clone(),
            reply_to: None,
            subject: format!("Thank you for contacting {}", contact.owner_name),
            html_body,
            text_body,
        }
    }
}
