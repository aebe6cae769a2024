//! Inquiry validation
//!
//! Length and email rules come from the `validator` derive on
//! [`ContactForm`]. Email addresses must also end in a dotted domain with a
//! TLD of at least two letters, and the two enumerated selects are parsed
//! into their typed values. Every field is checked on each run and only the
//! first failing message per field is kept.

use super::model::{BusinessSegment, ContactForm, ContactRequest, Field, HelpType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// `user@label.tld`: one or more dotted labels, alphabetic TLD of two or more
static EMAIL_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)@([a-z0-9][a-z0-9-]*\.)+[a-z]{2,}$").expect("email domain pattern")
});

/// Field-level validation messages, ordered by form position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn absorb(&mut self, report: &ValidationErrors) {
        for (key, errors) in report.field_errors() {
            let Some(field) = Field::from_key(&key) else {
                continue;
            };
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .or_else(|| field.message().map(str::to_string));
            if let Some(message) = message {
                self.insert(field, message);
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl ContactForm {
    /// Check every field and build the payload when all constraints hold
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(report) = Validate::validate(self) {
            errors.absorb(&report);
        }
        if !EMAIL_DOMAIN.is_match(&self.email) {
            errors.insert(Field::Email, "Invalid email address");
        }

        let business_segment =
            parse_select::<BusinessSegment>(&self.business_segment, Field::BusinessSegment, &mut errors);
        let help_type = parse_select::<HelpType>(&self.help_type, Field::HelpType, &mut errors);

        match (business_segment, help_type) {
            (Some(business_segment), Some(help_type)) if errors.is_empty() => Ok(ContactRequest {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                company: self.company.clone(),
                job_title: self.job_title.clone(),
                business_segment,
                help_type,
                referral_source: self.referral_source.clone(),
                additional_details: self.additional_details.clone(),
            }),
            _ => {
                debug!(
                    "Contact form rejected: {:?}",
                    errors.fields().map(|f| f.wire_name()).collect::<Vec<_>>()
                );
                Err(errors)
            }
        }
    }

    /// Message for a single field, or `None` when it passes
    pub fn validate_field(&self, field: Field) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| errors.get(field).map(str::to_string))
    }
}

fn parse_select<T: FromStr>(value: &str, field: Field, errors: &mut FieldErrors) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            if let Some(message) = field.message() {
                errors.insert(field, message);
            }
            None
        }
    }
}
