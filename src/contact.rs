//! Contact form handling.
//!
//! The site has no backend, so submission is simulated: the form is
//! validated, logged, and acknowledged with a receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::ValidationFailed(format!(
                    "contact {field} must be non-empty"
                )));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(SiteError::ValidationFailed(format!(
                "contact email is not a valid address: {}",
                self.email
            )));
        }
        Ok(())
    }

    /// Validate and acknowledge the form. Nothing leaves the process.
    pub fn submit(&self) -> Result<ContactReceipt> {
        self.validate()?;
        let receipt = ContactReceipt {
            reference: Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            message: "Message sent successfully! We'll get back to you soon.".to_string(),
        };
        info!(
            target: "contact",
            reference = %receipt.reference,
            subject = %self.subject,
            "contact form submitted"
        );
        Ok(receipt)
    }
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
