//! Request validation rules for user email and password.
//!
//! Rules are checked in a fixed order and the first violation is returned.
//! The email check only requires an `@` or a `.`
//! somewhere in the string.

use unicode_general_category::{GeneralCategory, get_general_category};
use users_sdk::UserRequest;

use crate::domain::error::DomainError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const ERR_EMPTY_FIELDS: &str = "email and password cannot be empty";
pub const ERR_EMAIL_FORMAT: &str = "invalid email format";
pub const ERR_PASSWORD_CHARSET: &str = "password must contain both letters and digits";
pub const ERR_PASSWORD_LENGTH: &str = "password must be at least 8 characters long";
pub const ERR_PASSWORD_SPACES: &str = "password must not contain spaces";
pub const ERR_ID_REQUIRED: &str = "user ID is required";

/// Validate a create/update request.
///
/// # Errors
/// Returns `DomainError::Validation` describing the first rule violated.
pub fn validate_user_request(req: &UserRequest) -> Result<(), DomainError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(DomainError::validation(ERR_EMPTY_FIELDS));
    }

    if !req.email.contains('@') && !req.email.contains('.') {
        return Err(DomainError::validation(ERR_EMAIL_FORMAT));
    }

    let (has_letter, has_digit) =
        req.password
            .chars()
            .fold((false, false), |(letter, digit), ch| {
                (letter || is_letter(ch), digit || is_decimal_digit(ch))
            });
    if !has_letter || !has_digit {
        return Err(DomainError::validation(ERR_PASSWORD_CHARSET));
    }

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(ERR_PASSWORD_LENGTH));
    }

    if req.password.contains(' ') {
        return Err(DomainError::validation(ERR_PASSWORD_SPACES));
    }

    Ok(())
}

/// Letter in the Unicode sense: general category `Lu`, `Ll`, `Lt`, `Lm` or `Lo`.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digit: general category `Nd` only.
fn is_decimal_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Reject an empty user id.
///
/// # Errors
/// Returns `DomainError::Validation` when `id` is empty.
pub fn require_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::validation(ERR_ID_REQUIRED));
    }
    Ok(())
}
