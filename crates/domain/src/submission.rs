//! Parsed, sanitized request submissions.
//!
//! Each endpoint declares its fields as an ordered rule table; the table is
//! evaluated uniformly in phases so both handlers share one validation path
//! and the first violation wins.

use serde_json::Value;

use crate::error::ValidationError;
use crate::validate::{is_gmail_address, is_valid_email, sanitize_input};

/// A single field rule: JSON key, user-facing label, and constraints.
struct FieldRule {
    name: &'static str,
    label: &'static str,
    is_email: bool,
    max_len: Option<usize>,
}

const SIGNUP_FIELDS: &[FieldRule] = &[FieldRule {
    name: "email",
    label: "Email",
    is_email: true,
    max_len: None,
}];

const CONTACT_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "name",
        label: "Name",
        is_email: false,
        max_len: Some(100),
    },
    FieldRule {
        name: "email",
        label: "Email",
        is_email: true,
        max_len: None,
    },
    FieldRule {
        name: "subject",
        label: "Subject",
        is_email: false,
        max_len: Some(200),
    },
    FieldRule {
        name: "message",
        label: "Message",
        is_email: false,
        max_len: Some(2000),
    },
];

/// Evaluates the rule table against a JSON body in phases:
/// presence for every field in declaration order, then sanitization
/// (emails also lowercased), then email format, then length limits in
/// declaration order. Returns the cleaned values in declaration order.
fn parse_fields(body: &Value, rules: &[FieldRule]) -> Result<Vec<String>, ValidationError> {
    let mut raw = Vec::with_capacity(rules.len());
    for rule in rules {
        let value = body
            .get(rule.name)
            .and_then(Value::as_str)
            .ok_or(ValidationError::Required(rule.label))?;
        // An empty email reads as missing, but a whitespace-only one falls
        // through to the format check. Non-email fields treat both as
        // missing.
        if value.is_empty() || (!rule.is_email && value.trim().is_empty()) {
            return Err(ValidationError::Required(rule.label));
        }
        raw.push(value);
    }

    let cleaned: Vec<String> = raw
        .iter()
        .zip(rules)
        .map(|(value, rule)| {
            let s = sanitize_input(value);
            if rule.is_email { s.to_lowercase() } else { s }
        })
        .collect();

    for (value, rule) in cleaned.iter().zip(rules) {
        if rule.is_email && !is_valid_email(value) {
            return Err(ValidationError::InvalidEmail);
        }
    }

    for (value, rule) in cleaned.iter().zip(rules) {
        if let Some(max) = rule.max_len
            && value.chars().count() > max
        {
            return Err(ValidationError::TooLong {
                label: rule.label,
                max,
            });
        }
    }

    Ok(cleaned)
}

/// A validated beta signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    /// Sanitized, lowercased Gmail address.
    pub email: String,
}

impl SignupSubmission {
    /// Parses a signup body, enforcing the Gmail-only beta policy after the
    /// syntactic email check.
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        let mut fields = parse_fields(body, SIGNUP_FIELDS)?.into_iter();
        let email = fields.next().unwrap_or_default();

        if !is_gmail_address(&email) {
            return Err(ValidationError::GmailRequired);
        }

        Ok(Self { email })
    }
}

/// A validated contact form request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Parses a contact body. Any email provider is accepted here; the
    /// Gmail restriction applies to beta signups only.
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        let mut fields = parse_fields(body, CONTACT_FIELDS)?.into_iter();

        Ok(Self {
            name: fields.next().unwrap_or_default(),
            email: fields.next().unwrap_or_default(),
            subject: fields.next().unwrap_or_default(),
            message: fields.next().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn signup_parse_accepts_gmail() {
        let parsed = SignupSubmission::parse(&json!({ "email": " Alice@Gmail.Com " })).unwrap();
        assert_eq!(parsed.email, "alice@gmail.com");
    }

    #[test]
    fn signup_parse_rejects_missing_email() {
        let err = SignupSubmission::parse(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::Required("Email"));
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn signup_parse_rejects_empty_email_as_required() {
        let err = SignupSubmission::parse(&json!({ "email": "" })).unwrap_err();
        assert_eq!(err, ValidationError::Required("Email"));
    }

    #[test]
    fn signup_parse_rejects_whitespace_email_as_bad_format() {
        let err = SignupSubmission::parse(&json!({ "email": "   " })).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn signup_parse_rejects_non_string_email() {
        let err = SignupSubmission::parse(&json!({ "email": 42 })).unwrap_err();
        assert_eq!(err, ValidationError::Required("Email"));
    }

    #[test]
    fn signup_parse_rejects_bad_format_before_policy() {
        let err = SignupSubmission::parse(&json!({ "email": "not-an-email" })).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn signup_parse_rejects_non_gmail_provider() {
        let err = SignupSubmission::parse(&json!({ "email": "alice@yahoo.com" })).unwrap_err();
        assert_eq!(err, ValidationError::GmailRequired);
        assert!(err.to_string().contains("Gmail"));
    }

    #[test]
    fn signup_parse_strips_angle_brackets() {
        let parsed = SignupSubmission::parse(&json!({ "email": "<alice@gmail.com>" })).unwrap();
        assert_eq!(parsed.email, "alice@gmail.com");
    }

    fn contact_body() -> Value {
        json!({
            "name": "Alice",
            "email": "alice@example.com",
            "subject": "Feeding schedule",
            "message": "How often should I feed a kitten?"
        })
    }

    #[test]
    fn contact_parse_accepts_valid_body() {
        let parsed = ContactSubmission::parse(&contact_body()).unwrap();
        assert_eq!(parsed.name, "Alice");
        assert_eq!(parsed.email, "alice@example.com");
    }

    #[test]
    fn contact_parse_accepts_any_provider() {
        let parsed = ContactSubmission::parse(&contact_body()).unwrap();
        assert!(!parsed.email.ends_with("@gmail.com"));
    }

    #[test]
    fn contact_parse_reports_first_missing_field() {
        let err = ContactSubmission::parse(&json!({ "email": "a@b.co" })).unwrap_err();
        assert_eq!(err, ValidationError::Required("Name"));
    }

    #[test]
    fn contact_parse_checks_presence_before_email_format() {
        // Subject missing and email malformed: presence of all fields is
        // checked before any format rule runs.
        let mut body = contact_body();
        body["email"] = json!("broken");
        body.as_object_mut().unwrap().remove("subject");
        let err = ContactSubmission::parse(&body).unwrap_err();
        assert_eq!(err, ValidationError::Required("Subject"));
    }

    #[test]
    fn contact_parse_rejects_whitespace_only_field() {
        let mut body = contact_body();
        body["message"] = json!("   ");
        let err = ContactSubmission::parse(&body).unwrap_err();
        assert_eq!(err, ValidationError::Required("Message"));
    }

    #[test]
    fn contact_parse_rejects_whitespace_email_as_bad_format() {
        let mut body = contact_body();
        body["email"] = json!("  ");
        let err = ContactSubmission::parse(&body).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn contact_parse_enforces_length_limits_in_order() {
        let mut body = contact_body();
        body["name"] = json!("x".repeat(101));
        body["message"] = json!("y".repeat(2001));
        let err = ContactSubmission::parse(&body).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                label: "Name",
                max: 100
            }
        );
    }

    #[test]
    fn contact_parse_rejects_oversized_message() {
        let mut body = contact_body();
        body["message"] = json!("y".repeat(2001));
        let err = ContactSubmission::parse(&body).unwrap_err();
        assert_eq!(err.to_string(), "Message must be less than 2000 characters");
    }

    #[test]
    fn contact_parse_accepts_message_at_limit() {
        let mut body = contact_body();
        body["message"] = json!("y".repeat(2000));
        assert!(ContactSubmission::parse(&body).is_ok());
    }

    #[test]
    fn contact_parse_measures_length_after_sanitization() {
        // 2000 chars of payload plus brackets that sanitization removes.
        let mut body = contact_body();
        body["message"] = json!(format!("<{}>", "y".repeat(2000)));
        assert!(ContactSubmission::parse(&body).is_ok());
    }
}
