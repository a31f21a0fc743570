//! Checks run locally before a request is sent.

use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Input rejected before reaching the server. Messages are shown as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("All password fields are required")]
    MissingPasswordFields,
    #[error("New passwords do not match")]
    NewPasswordMismatch,
    #[error("New password must be at least 6 characters")]
    NewPasswordTooShort,
    #[error("New password must be different from current password")]
    NewPasswordUnchanged,
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
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

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn check_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn check_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    check_login(email, password)?;

    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn check_password_change(
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if current_password.is_empty() || new_password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingPasswordFields);
    }
    if new_password != confirm_password {
        return Err(ValidationError::NewPasswordMismatch);
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::NewPasswordTooShort);
    }
    if new_password == current_password {
        return Err(ValidationError::NewPasswordUnchanged);
    }
    Ok(())
}
