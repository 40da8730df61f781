use super::error::UserError;

pub const WEAK_PASSWORD: &str = "Password does not meet security requirements";
pub const SAME_PASSWORD: &str = "New password cannot be the same as current password";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const EMAIL_TAKEN: &str = "Email is already registered";

/// Password strength rules shared by registration and forced changes.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn check(&self, password: &str) -> Result<(), UserError> {
        if password.chars().count() < self.min_length {
            return Err(UserError::ValidationError(WEAK_PASSWORD.to_string()));
        }
        Ok(())
    }
}

/// Minimal structural email check: it must contain an `@`.
pub fn check_email(email: &str) -> Result<(), UserError> {
    if !email.contains('@') {
        return Err(UserError::InvalidArgument(INVALID_EMAIL.to_string()));
    }
    Ok(())
}
