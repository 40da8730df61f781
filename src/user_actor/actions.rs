/// Custom actions for UserAccount entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Replaces the stored password.
    ///
    /// # Errors
    /// Fails when the new password equals the current one.
    ChangePassword(String),
    /// Compares a candidate against the stored password without changing it.
    VerifyPassword(String),
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    ChangePassword,
    VerifyPassword(bool),
}
