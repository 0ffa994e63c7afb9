use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{require_present, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_present("name", &self.name)?;
        require_present("email", &self.email)?;
        require_present("subject", &self.subject)?;
        require_present("message", &self.message)
    }
}

/// A visitor message from the contact page, stamped at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactMessage {
    pub fn stamp(input: ContactInput, timestamp: DateTime<Utc>) -> Result<Self, ModelError> {
        input.validate()?;
        Ok(Self {
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            timestamp,
        })
    }
}
