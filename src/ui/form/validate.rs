//! Contact form validation. Pure functions, no hidden state.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid email pattern regex")
});

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 500;
pub const PHONE_DIGITS_MIN: usize = 7;
pub const PHONE_DIGITS_MAX: usize = 15;

/// A contact form field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Message];

    pub fn name(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw values of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Message => self.message = value,
        }
    }
}

/// Outcome for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub field: FieldId,
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl FieldResult {
    fn ok(field: FieldId) -> Self {
        Self {
            field,
            valid: true,
            message: None,
        }
    }

    fn fail(field: FieldId, message: &'static str) -> Self {
        Self {
            field,
            valid: false,
            message: Some(message),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

pub fn validate_name(s: &str) -> FieldResult {
    let len = char_len(s);
    if len < NAME_MIN {
        FieldResult::fail(
            FieldId::Name,
            "Please enter a valid name (at least 2 characters)",
        )
    } else if len > NAME_MAX {
        FieldResult::fail(FieldId::Name, "Name must be less than 50 characters")
    } else {
        FieldResult::ok(FieldId::Name)
    }
}

pub fn validate_email(s: &str) -> FieldResult {
    let s = s.trim();
    if s.is_empty() || !EMAIL_PATTERN.is_match(s) {
        FieldResult::fail(FieldId::Email, "Please enter a valid email address")
    } else {
        FieldResult::ok(FieldId::Email)
    }
}

/// Optional field: empty is valid.
pub fn validate_phone(s: &str) -> FieldResult {
    let s = s.trim();
    if s.is_empty() || is_valid_phone(s) {
        FieldResult::ok(FieldId::Phone)
    } else {
        FieldResult::fail(FieldId::Phone, "Please enter a valid phone number")
    }
}

fn is_valid_phone(s: &str) -> bool {
    let stripped: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits.len()) {
        return false;
    }
    !digits.starts_with('0')
}

pub fn validate_message(s: &str) -> FieldResult {
    let len = char_len(s);
    if len < MESSAGE_MIN {
        FieldResult::fail(
            FieldId::Message,
            "Please enter a message (at least 10 characters)",
        )
    } else if len > MESSAGE_MAX {
        FieldResult::fail(FieldId::Message, "Message must be less than 500 characters")
    } else {
        FieldResult::ok(FieldId::Message)
    }
}

pub fn validate_field(field: FieldId, value: &str) -> FieldResult {
    match field {
        FieldId::Name => validate_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Phone => validate_phone(value),
        FieldId::Message => validate_message(value),
    }
}

/// Validation as the visitor leaves a field.
///
/// Empty fields are not flagged here; a required field left empty is only
/// reported on submit.
pub fn validate_on_blur(field: FieldId, value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return FieldResult::ok(field);
    }
    validate_field(field, value)
}

/// Every field's result, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<FieldResult>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    pub fn results(&self) -> &[FieldResult] {
        &self.results
    }

    /// All failing fields, none dropped.
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
        self.results
            .iter()
            .filter_map(|r| r.message.filter(|_| !r.valid).map(|m| (r.field, m)))
    }

    /// Field that should receive focus.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.results.iter().find(|r| !r.valid).map(|r| r.field)
    }
}

pub fn validate_form(fields: &ContactFields) -> ValidationReport {
    ValidationReport {
        results: FieldId::ALL
            .into_iter()
            .map(|field| validate_field(field, fields.get(field)))
            .collect(),
    }
}

/// Character counter under the message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub count: usize,
    pub over_limit: bool,
}

impl CharCount {
    pub fn of(message: &str) -> Self {
        let count = message.chars().count();
        Self {
            count,
            over_limit: count > MESSAGE_MAX,
        }
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.count, MESSAGE_MAX)
    }
}

/// `(555) 123-4567` for ten-digit numbers, the input unchanged otherwise.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return phone.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    #[test]
    fn name_boundaries() {
        assert!(!validate_name("A").valid);
        assert!(!validate_name("  A  ").valid);
        assert!(validate_name("Al").valid);
        assert!(validate_name(&"a".repeat(50)).valid);
        assert!(!validate_name(&"a".repeat(51)).valid);
    }

    #[test]
    fn email_accepts_and_rejects() {
        assert!(validate_email("a@b.com").valid);
        assert!(!validate_email("").valid);
        assert!(!validate_email("a@@b.com").valid);
        assert!(!validate_email("plainaddress").valid);
        assert!(!validate_email("a@-b.com").valid);
        assert!(!validate_email("a@b-.com").valid);
        assert!(!validate_email("a@b..com").valid);
    }

    #[test]
    fn email_single_label_domain_matches_pattern() {
        // The dot-separated suffix group is optional in the pattern.
        assert!(validate_email("a@b").valid);
    }

    #[test]
    fn email_label_length_limit() {
        let ok = format!("a@{}.com", "b".repeat(63));
        let too_long = format!("a@{}.com", "b".repeat(64));
        assert!(validate_email(&ok).valid);
        assert!(!validate_email(&too_long).valid);
    }

    #[test]
    fn message_boundaries() {
        assert!(!validate_message(&"m".repeat(9)).valid);
        assert!(validate_message(&"m".repeat(10)).valid);
        assert!(validate_message(&"m".repeat(500)).valid);
        assert!(!validate_message(&"m".repeat(501)).valid);
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone("").valid);
        assert!(validate_phone("   ").valid);
        assert!(!validate_phone("123").valid);
        assert!(validate_phone("(555) 123-4567").valid);
        assert!(validate_phone("+44 20 7946 0958").valid);
        assert!(!validate_phone("0123456789").valid);
        assert!(!validate_phone("555-CALL-NOW").valid);
        assert!(!validate_phone(&"1".repeat(16)).valid);
        assert!(validate_phone(&"1".repeat(15)).valid);
    }

    #[test]
    fn form_reports_every_failure() {
        let report = validate_form(&fields("A", "nope", "12", "short"));
        assert!(!report.is_valid());
        let failing: Vec<FieldId> = report.errors().map(|(f, _)| f).collect();
        assert_eq!(
            failing,
            vec![FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Message]
        );
        assert_eq!(report.first_invalid(), Some(FieldId::Name));
    }

    #[test]
    fn form_valid_without_phone() {
        let report = validate_form(&fields(
            "Jane Doe",
            "jane@example.com",
            "",
            "I'd love a newborn session in May.",
        ));
        assert!(report.is_valid());
        assert_eq!(report.errors().count(), 0);
        assert_eq!(report.first_invalid(), None);
    }

    #[test]
    fn first_invalid_follows_form_order() {
        let report = validate_form(&fields("Jane", "jane@example.com", "12", "short"));
        assert_eq!(report.first_invalid(), Some(FieldId::Phone));
    }

    #[test]
    fn blur_skips_empty_fields() {
        assert!(validate_on_blur(FieldId::Name, "").valid);
        assert!(validate_on_blur(FieldId::Message, "  ").valid);
        assert!(!validate_on_blur(FieldId::Name, "J").valid);
        assert!(!validate_on_blur(FieldId::Email, "jane@").valid);
    }

    #[test]
    fn char_count_counts_raw_length() {
        let count = CharCount::of("  hi  ");
        assert_eq!(count.count, 6);
        assert!(!count.over_limit);
        assert!(CharCount::of(&"x".repeat(501)).over_limit);
        assert_eq!(CharCount::of("abc").to_string(), "3/500 characters");
    }

    #[test]
    fn formats_ten_digit_numbers() {
        assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone_number("+1 555 123 4567"), "+1 555 123 4567");
    }
}
