//! Field-level validation of user drafts.
//!
//! Validation is pure and operates on raw input; nothing is normalized in the draft.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Status, UserDraft};

/// Field name -> message. Empty means the draft is valid.
pub type FieldErrors = BTreeMap<String, String>;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_STATUS: &str = "status";

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const ROLE_MIN: usize = 2;
const ROLE_MAX: usize = 30;
const PHONE_MIN_DIGITS: usize = 10;
const SEARCH_TERM_MAX: usize = 100;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яёА-ЯЁa-zA-Z\s-]+$").expect("valid name regex"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone regex"));

/// Validate every field of a draft.
pub fn validate(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let checks = [
        (FIELD_NAME, validate_name(&draft.name)),
        (FIELD_EMAIL, validate_email(&draft.email)),
        (FIELD_ROLE, validate_role(&draft.role)),
        (FIELD_STATUS, validate_status(&draft.status)),
    ];
    for (field, result) in checks {
        if let Err(msg) = result {
            errors.insert(field.to_string(), msg.to_string());
        }
    }

    if let Some(phone) = &draft.phone {
        if let Err(msg) = validate_phone(phone) {
            errors.insert(FIELD_PHONE.to_string(), msg.to_string());
        }
    }

    errors
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name");
    }
    let len = name.chars().count();
    if len < NAME_MIN {
        return Err("Name must be at least 2 characters");
    }
    if len > NAME_MAX {
        return Err("Name must not exceed 50 characters");
    }
    if !NAME_PATTERN.is_match(name) {
        return Err("Name may contain only letters, spaces and hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err("Enter a valid email");
    }
    Ok(())
}

/// Punctuation and spaces are ignored; the remaining digits (with an optional
/// leading `+`) must form a number of at least 10 characters.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.is_empty() {
        return Err("Enter a phone number");
    }
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if !PHONE_PATTERN.is_match(&cleaned) || cleaned.len() < PHONE_MIN_DIGITS {
        return Err("Enter a valid phone number");
    }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<(), &'static str> {
    let role = role.trim();
    if role.is_empty() {
        return Err("Enter a role");
    }
    let len = role.chars().count();
    if len < ROLE_MIN {
        return Err("Role must be at least 2 characters");
    }
    if len > ROLE_MAX {
        return Err("Role must not exceed 30 characters");
    }
    Ok(())
}

pub fn validate_status(status: &str) -> Result<(), &'static str> {
    if status.is_empty() {
        return Err("Select a status");
    }
    Status::parse(status)
        .map(|_| ())
        .ok_or("Status must be active or inactive")
}

/// Advisory check for the search box. The view model stores terms verbatim
/// regardless of the outcome.
pub fn validate_search_term(term: &str) -> Result<(), &'static str> {
    if term.chars().count() > SEARCH_TERM_MAX {
        return Err("Search query must not exceed 100 characters");
    }
    if term.contains(['<', '>']) {
        return Err("Search query contains forbidden characters");
    }
    Ok(())
}
