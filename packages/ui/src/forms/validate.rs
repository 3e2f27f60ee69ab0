use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Field name → first validation message for that field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Adds `message` when `value` is blank. Returns whether the value was present.
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, message);
        false
    } else {
        true
    }
}

// Compiled once on first use; the patterns are literals.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));
static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$"));
static LOCAL_URL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^https?://localhost(:\d+)?(/[^\s]*)?$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\+?[1-9]\d{1,14}$"));
static PRICE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d+(\.\d{1,2})?$"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("validation patterns are valid regex literals")
}

/// Loose `local@domain.tld` check.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// The stricter address rule of the profile form.
pub fn is_strict_email(value: &str) -> bool {
    STRICT_EMAIL.is_match(value.trim())
}

pub fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    HTTP_URL.is_match(value) || LOCAL_URL.is_match(value)
}

/// E.164-style number: optional `+`, no leading zero, at most 15 digits.
pub fn is_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Whole amount or at most two decimals.
pub fn is_price(value: &str) -> bool {
    PRICE.is_match(value.trim())
}

/// `YYYY-MM-DD`, as `<input type="date">` produces.
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// At least eight characters with a letter, a digit and a symbol; no spaces.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_punctuation())
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Invalid email");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
        assert!(errors.clone().into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn emails() {
        assert!(is_email("a@b.co"));
        assert!(is_email(" admin@example.com "));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.de"));
        assert!(is_strict_email("first.last+tag@mail.example.org"));
        assert!(!is_strict_email("a@b.c"));
    }

    #[test]
    fn patterns_compile_once() {
        for re in [&EMAIL, &STRICT_EMAIL, &HTTP_URL, &LOCAL_URL, &PHONE, &PRICE] {
            let first: *const Regex = &**re;
            let again: *const Regex = &**re;
            assert_eq!(first, again);
        }
        assert!(is_phone("+919876543210"));
        assert!(!is_phone("0123"));
        assert!(is_price("100"));
        assert!(is_price(" 99.50 "));
        assert!(!is_price("9.999"));
    }

    #[test]
    fn urls_and_dates() {
        assert!(is_http_url("https://example.com"));
        assert!(is_http_url("http://fees.example.com/app?x=1"));
        assert!(is_http_url("http://localhost:3000"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(is_iso_date("2024-02-29"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("29/02/2024"));
    }

    #[test]
    fn strong_passwords() {
        assert!(is_strong_password("Secret#12"));
        assert!(!is_strong_password("Secret12"));
        assert!(!is_strong_password("secret#!"));
        assert!(!is_strong_password("S#1a"));
        assert!(!is_strong_password("Secret #12"));
    }
}
