//! Contact intents
//!
//! The reach-out form never sends anything itself. It hands the visitor off
//! to WhatsApp, their mail client, or the phone dialer with the inquiry
//! pre-filled; this module builds those links.

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::error::AppError;

/// Line break as it must appear inside a mailto body
const MAIL_LINE_BREAK: &str = "%0D%0A";

/// Inquiry submitted from the reach-out form
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Pre-filled links for each contact channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactIntents {
    pub whatsapp: String,
    pub mailto: String,
    pub phone: String,
}

/// Agency contact details the links point at
#[derive(Debug, Clone)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    pub fn new(email: String, phone: String) -> Self {
        Self { email, phone }
    }

    /// Phone number as WhatsApp expects it: digits only
    fn whatsapp_number(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn build_intents(&self, inquiry: &ContactInquiry) -> Result<ContactIntents, AppError> {
        let name = inquiry.name.trim();
        let email = inquiry.email.trim();
        let message = inquiry.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::BadRequest(
                "Please fill in all fields before sending.".to_string(),
            ));
        }

        let whatsapp_text = format!("Hi! I'm {} ({}). {}", name, email, message);
        let whatsapp = format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number(),
            encode(&whatsapp_text)
        );

        let subject = format!("New Project Inquiry from {}", name);
        let body = [
            format!("Name: {}", encode(name)),
            format!("Email: {}", encode(email)),
            String::new(),
            "Message:".to_string(),
            encode(message).into_owned(),
        ]
        .join(MAIL_LINE_BREAK);
        let mailto = format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            encode(&subject),
            body
        );

        Ok(ContactIntents {
            whatsapp,
            mailto,
            phone: format!("tel:{}", self.phone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ContactDetails {
        ContactDetails::new(
            "lumiere.elevated@gmail.com".to_string(),
            "+919901584053".to_string(),
        )
    }

    fn inquiry(name: &str, email: &str, message: &str) -> ContactInquiry {
        ContactInquiry {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn builds_whatsapp_link_with_digits_only() {
        let intents = details()
            .build_intents(&inquiry("Ana", "ana@example.com", "Need a reel"))
            .unwrap();

        assert_eq!(
            intents.whatsapp,
            "https://wa.me/919901584053?text=Hi%21%20I%27m%20Ana%20%28ana%40example.com%29.%20Need%20a%20reel"
        );
    }

    #[test]
    fn builds_mailto_with_crlf_body() {
        let intents = details()
            .build_intents(&inquiry("Ana", "ana@example.com", "Hello there"))
            .unwrap();

        assert_eq!(
            intents.mailto,
            "mailto:lumiere.elevated@gmail.com?subject=New%20Project%20Inquiry%20from%20Ana\
             &body=Name: Ana%0D%0AEmail: ana%40example.com%0D%0A%0D%0AMessage:%0D%0AHello%20there"
        );
        assert_eq!(intents.phone, "tel:+919901584053");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let err = details()
            .build_intents(&inquiry("Ana", "   ", "Hello"))
            .unwrap_err();

        assert!(
            matches!(err, AppError::BadRequest(ref msg) if msg == "Please fill in all fields before sending.")
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let intents = details()
            .build_intents(&inquiry("  Ana ", "ana@example.com", " Hi "))
            .unwrap();

        assert!(intents.whatsapp.ends_with("Hi%21%20I%27m%20Ana%20%28ana%40example.com%29.%20Hi"));
    }
}
