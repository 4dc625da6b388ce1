//! Field-level validation shared by the administration and registration
//! services.
//!
//! Validation failures surface as [`Error::Validation`] with the offending
//! field named, except for student payloads, which use the dedicated
//! [`Error::InvalidStudentData`] classification of the registration
//! contract.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::types::{CampDraft, SchoolUserDraft, Student};

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex compiles"));

/// Earliest plausible year of birth for a registering student.
const MIN_BIRTH_YEAR: i32 = 1900;

/// Checks that a string looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks that a string looks like a phone number: an optional leading `+`
/// followed by 7 to 15 digits, ignoring spaces and hyphens.
pub fn is_valid_phone(value: &str) -> bool {
    let trimmed = value.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = rest.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_field(field, "must not be empty"));
    }
    Ok(())
}

/// Validates a camp draft before creation or edit.
///
/// Enforces: non-empty name/location/contact fields, a non-empty district
/// set, `end_date` strictly after `start_date`, positive capacity, and
/// well-formed contact email and phone number.
pub fn validate_camp_draft(draft: &CampDraft) -> Result<()> {
    require_non_empty("name", &draft.name)?;
    require_non_empty("location", &draft.location)?;
    require_non_empty("contact_person", &draft.contact_person)?;

    if draft.districts.is_empty() || draft.districts.iter().all(|d| d.trim().is_empty()) {
        return Err(Error::validation_field(
            "districts",
            "at least one district is required",
        ));
    }
    if draft.end_date <= draft.start_date {
        return Err(Error::validation_field(
            "end_date",
            "must be after start date",
        ));
    }
    if draft.max_participants == 0 {
        return Err(Error::validation_field(
            "max_participants",
            "must be a positive number",
        ));
    }
    if !is_valid_email(&draft.contact_email) {
        return Err(Error::validation_field(
            "contact_email",
            "not a valid email address",
        ));
    }
    if !is_valid_phone(&draft.contact_number) {
        return Err(Error::validation_field(
            "contact_number",
            "not a valid phone number",
        ));
    }
    Ok(())
}

/// Validates a school user draft, whether entered individually or parsed
/// from a bulk-import row.
pub fn validate_school_draft(draft: &SchoolUserDraft) -> Result<()> {
    require_non_empty("schoolName", &draft.school_name)?;
    require_non_empty("location", &draft.location)?;
    require_non_empty("district", &draft.district)?;
    require_non_empty("principalName", &draft.principal_name)?;
    require_non_empty("trainerName", &draft.trainer_name)?;

    if !is_valid_phone(&draft.trainer_contact) {
        return Err(Error::validation_field(
            "trainerContact",
            "not a valid phone number",
        ));
    }
    if !is_valid_email(&draft.school_email) {
        return Err(Error::validation_field(
            "schoolEmail",
            "not a valid email address",
        ));
    }
    Ok(())
}

/// Validates a registration's student payload.
///
/// The list itself must be non-empty; every entry must carry a non-empty
/// name, a non-empty father's/guardian's name, and a date of birth that is
/// neither in the future nor implausibly old.
pub fn validate_students(students: &[Student], today: NaiveDate) -> Result<()> {
    if students.is_empty() {
        return Err(Error::invalid_student("student list must not be empty"));
    }
    for (index, student) in students.iter().enumerate() {
        if student.name.trim().is_empty() {
            return Err(Error::invalid_student(format!(
                "student #{}: name must not be empty",
                index + 1
            )));
        }
        if student.father_name.trim().is_empty() {
            return Err(Error::invalid_student(format!(
                "student #{} ({}): father's name must not be empty",
                index + 1,
                student.name
            )));
        }
        if student.date_of_birth > today {
            return Err(Error::invalid_student(format!(
                "student #{} ({}): date of birth is in the future",
                index + 1,
                student.name
            )));
        }
        if student.date_of_birth.year() < MIN_BIRTH_YEAR {
            return Err(Error::invalid_student(format!(
                "student #{} ({}): date of birth predates {}",
                index + 1,
                student.name,
                MIN_BIRTH_YEAR
            )));
        }
    }
    Ok(())
}
