//! Local form validation shared by the login and profile screens.

use thiserror::Error;

use crate::api::ApiError;

/// Minimum length of a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form was rejected before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("The new password must differ from the current one")]
    PasswordUnchanged,

    #[error("User is not authenticated")]
    NotLoggedIn,
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        ApiError::precondition(err.to_string())
    }
}

/// Trimmed values of `fields`, or `MissingFields` if any is blank.
pub(crate) fn required<const N: usize>(fields: [&str; N]) -> Result<[String; N], FormError> {
    let trimmed = fields.map(|field| field.trim().to_string());
    if trimmed.iter().any(String::is_empty) {
        return Err(FormError::MissingFields);
    }
    Ok(trimmed)
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Strength meter for `password`; `None` while it is empty.
    ///
    /// One point each for: 6+ chars, 8+ chars, mixed case, a digit, a
    /// symbol. Up to 2 points is weak, 3 medium, more is strong.
    pub fn of(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        let len = password.chars().count();
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let score = [
            len >= MIN_PASSWORD_LEN,
            len >= 8,
            has_lower && has_upper,
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ]
        .into_iter()
        .filter(|point| *point)
        .count();

        Some(match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}
