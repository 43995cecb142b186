use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const MAX_NAME_CHARS: usize = 100;
const MAX_MESSAGE_CHARS: usize = 5000;
const MIN_PHONE_DIGITS: usize = 7;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Fields of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> ContactField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> ContactField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, phone: Option<&str>, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            message: message.trim().to_string(),
        }
    }

    /// Every problem with the message, keyed by field
    pub fn field_errors(&self) -> Vec<(ContactField, String)> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push((ContactField::Name, "name is required".to_string()));
        } else if self.name.chars().count() > MAX_NAME_CHARS {
            errors.push((
                ContactField::Name,
                format!("name must be at most {MAX_NAME_CHARS} characters"),
            ));
        }

        if self.email.is_empty() {
            errors.push((ContactField::Email, "email is required".to_string()));
        } else if !email_pattern().is_match(&self.email) {
            errors.push((ContactField::Email, format!("'{}' is not a valid email", self.email)));
        }

        if let Some(phone) = &self.phone {
            let allowed = phone
                .chars()
                .all(|c| c.is_ascii_digit() || " +-().".contains(c));
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if !allowed || digits < MIN_PHONE_DIGITS {
                errors.push((ContactField::Phone, format!("'{phone}' is not a valid phone number")));
            }
        }

        if self.message.is_empty() {
            errors.push((ContactField::Message, "message is required".to_string()));
        } else if self.message.chars().count() > MAX_MESSAGE_CHARS {
            errors.push((
                ContactField::Message,
                format!("message must be at most {MAX_MESSAGE_CHARS} characters"),
            ));
        }

        errors
    }

    /// Fail with the first problem found
    pub fn validate(&self) -> Result<()> {
        match self.field_errors().into_iter().next() {
            Some((_, reason)) => Err(Error::InvalidContact(reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage::new("Dana", "dana@example.com", Some("+1 (555) 010-2030"), "Hello there")
    }

    #[test]
    fn test_valid_message() {
        assert!(valid().validate().is_ok());
        assert!(valid().field_errors().is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let msg = ContactMessage::new("  Dana ", " dana@example.com ", Some("   "), " hi ");
        assert_eq!(msg.name, "Dana");
        assert_eq!(msg.email, "dana@example.com");
        assert_eq!(msg.phone, None);
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn test_bad_email() {
        let msg = ContactMessage { email: "dana@example".to_string(), ..valid() };
        let errors = msg.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ContactField::Email);
        assert!(matches!(msg.validate(), Err(Error::InvalidContact(_))));
    }

    #[test]
    fn test_bad_phone() {
        let msg = ContactMessage { phone: Some("call me".to_string()), ..valid() };
        assert_eq!(msg.field_errors()[0].0, ContactField::Phone);

        let msg = ContactMessage { phone: Some("12345".to_string()), ..valid() };
        assert_eq!(msg.field_errors()[0].0, ContactField::Phone);
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let msg = ContactMessage::new("", "", None, "");
        let fields: Vec<_> = msg.field_errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_message_too_long() {
        let msg = ContactMessage { message: "x".repeat(MAX_MESSAGE_CHARS + 1), ..valid() };
        assert_eq!(msg.field_errors()[0].0, ContactField::Message);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }
}
