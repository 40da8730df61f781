use crate::domain::LoginOutcome;

/// Custom actions for LoginIdentity entities.
#[derive(Debug, Clone)]
pub enum IdentityAction {
    /// Records one login attempt whose credentials were already judged.
    AttemptLogin { credentials_valid: bool },
    /// Administrative lock. Idempotent.
    Lock,
}

/// Results from IdentityActions - variants match 1:1 with IdentityAction
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityActionResult {
    AttemptLogin { outcome: LoginOutcome, failed_attempts: u32 },
    Lock,
}
