use chrono::Utc;
use models::contact::{ContactInput, ContactMessage};
use tracing::info;

use crate::errors::ServiceError;

/// Accept a contact-page message. Messages are only logged; nothing is stored
/// or forwarded.
pub fn submit_contact(input: ContactInput) -> Result<ContactMessage, ServiceError> {
    let msg = ContactMessage::stamp(input, Utc::now())?;
    info!(
        name = %msg.name,
        email = %msg.email,
        subject = %msg.subject,
        timestamp = %msg.timestamp.to_rfc3339(),
        "contact form submission"
    );
    Ok(msg)
}
