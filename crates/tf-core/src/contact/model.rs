//! Contact inquiry data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    JobTitle,
    BusinessSegment,
    HelpType,
    ReferralSource,
    AdditionalDetails,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::JobTitle,
        Field::BusinessSegment,
        Field::HelpType,
        Field::ReferralSource,
        Field::AdditionalDetails,
    ];

    /// Key used in the JSON payload
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::JobTitle => "jobTitle",
            Field::BusinessSegment => "businessSegment",
            Field::HelpType => "helpType",
            Field::ReferralSource => "referralSource",
            Field::AdditionalDetails => "additionalDetails",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Company => "Company Name",
            Field::JobTitle => "Job Title",
            Field::BusinessSegment => "Business Segment",
            Field::HelpType => "How Can We Help You?",
            Field::ReferralSource => "How Did You Hear About Us?",
            Field::AdditionalDetails => "Additional Details",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::AdditionalDetails)
    }

    /// Message shown when the field fails its constraint; `None` for fields without one
    pub fn message(&self) -> Option<&'static str> {
        let message = match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::Email => "Invalid email address",
            Field::Phone => "Valid phone number is required",
            Field::Company => "Company name is required",
            Field::JobTitle => "Job title is required",
            Field::BusinessSegment => "Please select a business segment",
            Field::HelpType => "Please select how we can help",
            Field::ReferralSource => "Please select how you heard about us",
            Field::AdditionalDetails => return None,
        };
        Some(message)
    }

    /// Resolve either the struct field name or the wire name
    pub(crate) fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| {
            field.wire_name() == key || field.snake_name() == key
        })
    }

    fn snake_name(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::JobTitle => "job_title",
            Field::BusinessSegment => "business_segment",
            Field::HelpType => "help_type",
            Field::ReferralSource => "referral_source",
            Field::AdditionalDetails => "additional_details",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSegment {
    Manufacturing,
    Healthcare,
    Finance,
    Technology,
    Other,
}

impl BusinessSegment {
    pub const ALL: [BusinessSegment; 5] = [
        BusinessSegment::Manufacturing,
        BusinessSegment::Healthcare,
        BusinessSegment::Finance,
        BusinessSegment::Technology,
        BusinessSegment::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BusinessSegment::Manufacturing => "manufacturing",
            BusinessSegment::Healthcare => "healthcare",
            BusinessSegment::Finance => "finance",
            BusinessSegment::Technology => "technology",
            BusinessSegment::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessSegment::Manufacturing => "Manufacturing",
            BusinessSegment::Healthcare => "Healthcare",
            BusinessSegment::Finance => "Finance",
            BusinessSegment::Technology => "Technology",
            BusinessSegment::Other => "Other",
        }
    }
}

impl FromStr for BusinessSegment {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessSegment::ALL
            .into_iter()
            .find(|segment| segment.value() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for BusinessSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpType {
    ProductInfo,
    Quote,
    Demo,
    Support,
    Other,
}

impl HelpType {
    pub const ALL: [HelpType; 5] = [
        HelpType::ProductInfo,
        HelpType::Quote,
        HelpType::Demo,
        HelpType::Support,
        HelpType::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            HelpType::ProductInfo => "product-info",
            HelpType::Quote => "quote",
            HelpType::Demo => "demo",
            HelpType::Support => "support",
            HelpType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HelpType::ProductInfo => "Product Information",
            HelpType::Quote => "Request a Quote",
            HelpType::Demo => "Request a Demo",
            HelpType::Support => "Technical Support",
            HelpType::Other => "Other",
        }
    }
}

impl FromStr for HelpType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HelpType::ALL
            .into_iter()
            .find(|help| help.value() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Suggested answers for the referral select (value, label).
/// The field itself accepts any non-empty text.
pub const REFERRAL_SOURCES: [(&str, &str); 6] = [
    ("web", "Website"),
    ("search", "Search Engine"),
    ("social", "Social Media"),
    ("referral", "Colleague or Partner"),
    ("event", "Event or Trade Show"),
    ("other", "Other"),
];

/// Raw field values as entered on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Valid phone number is required"))]
    pub phone: String,

    #[validate(length(min = 2, message = "Company name is required"))]
    pub company: String,

    #[validate(length(min = 2, message = "Job title is required"))]
    pub job_title: String,

    #[validate(length(min = 1, message = "Please select a business segment"))]
    pub business_segment: String,

    #[validate(length(min = 1, message = "Please select how we can help"))]
    pub help_type: String,

    #[validate(length(min = 1, message = "Please select how you heard about us"))]
    pub referral_source: String,

    pub additional_details: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::JobTitle => &self.job_title,
            Field::BusinessSegment => &self.business_segment,
            Field::HelpType => &self.help_type,
            Field::ReferralSource => &self.referral_source,
            Field::AdditionalDetails => &self.additional_details,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::JobTitle => &mut self.job_title,
            Field::BusinessSegment => &mut self.business_segment,
            Field::HelpType => &mut self.help_type,
            Field::ReferralSource => &mut self.referral_source,
            Field::AdditionalDetails => &mut self.additional_details,
        };
        *slot = value.into();
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A validated inquiry, serialized as the `/api/contact` JSON body.
///
/// Only [`ContactForm::validate`] produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) company: String,
    pub(crate) job_title: String,
    pub(crate) business_segment: BusinessSegment,
    pub(crate) help_type: HelpType,
    pub(crate) referral_source: String,
    pub(crate) additional_details: String,
}

impl ContactRequest {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn business_segment(&self) -> BusinessSegment {
        self.business_segment
    }

    pub fn help_type(&self) -> HelpType {
        self.help_type
    }

    pub fn referral_source(&self) -> &str {
        &self.referral_source
    }

    pub fn additional_details(&self) -> Option<&str> {
        if self.additional_details.is_empty() {
            None
        } else {
            Some(&self.additional_details)
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Back to raw form values, e.g. to revalidate a payload on another host
impl From<&ContactRequest> for ContactForm {
    fn from(request: &ContactRequest) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            company: request.company.clone(),
            job_title: request.job_title.clone(),
            business_segment: request.business_segment.value().to_string(),
            help_type: request.help_type.value().to_string(),
            referral_source: request.referral_source.clone(),
            additional_details: request.additional_details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_resolve_both_spellings() {
        assert_eq!(Field::from_key("jobTitle"), Some(Field::JobTitle));
        assert_eq!(Field::from_key("job_title"), Some(Field::JobTitle));
        assert_eq!(Field::from_key("nickname"), None);
    }

    #[test]
    fn test_select_values_parse() {
        assert_eq!("product-info".parse::<HelpType>(), Ok(HelpType::ProductInfo));
        assert_eq!("technology".parse::<BusinessSegment>(), Ok(BusinessSegment::Technology));
        assert!("Technology".parse::<BusinessSegment>().is_err());
        assert!("".parse::<HelpType>().is_err());
    }

    #[test]
    fn test_set_and_get_every_field() {
        let mut form = ContactForm::new();
        assert!(form.is_blank());

        for field in Field::ALL {
            form.set(field, field.wire_name());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.wire_name());
        }
        assert!(!form.is_blank());
    }

    #[test]
    fn test_only_details_are_optional() {
        let optional: Vec<_> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::AdditionalDetails]);
    }

    #[test]
    fn test_required_fields_carry_a_message() {
        for field in Field::ALL {
            assert_eq!(field.message().is_some(), field.is_required(), "field {}", field);
        }
        assert_eq!(Field::AdditionalDetails.message(), None);
    }
}
