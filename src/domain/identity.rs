use uuid::Uuid;

use super::User;

/// Consecutive failed attempts after which an identity is locked for good.
pub const LOCKOUT_THRESHOLD: u32 = 5;

/// Login bookkeeping for one identity key (an email address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginIdentity {
    pub key: String,
    pub failed_attempts: u32,
    pub locked: bool,
}

/// What a single login attempt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    /// Wrong credentials, identity still active
    Rejected,
    /// Identity is locked, either already or as a result of this attempt
    Locked,
}

impl LoginIdentity {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            failed_attempts: 0,
            locked: false,
        }
    }

    /// Applies one attempt. Locked identities are refused before the
    /// credential outcome is even looked at.
    pub fn record_attempt(&mut self, credentials_valid: bool) -> LoginOutcome {
        if self.locked {
            return LoginOutcome::Locked;
        }
        if credentials_valid {
            self.failed_attempts = 0;
            return LoginOutcome::Accepted;
        }
        self.failed_attempts = self.failed_attempts.saturating_add(1);
        if self.failed_attempts >= LOCKOUT_THRESHOLD {
            self.locked = true;
            LoginOutcome::Locked
        } else {
            LoginOutcome::Rejected
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }
}

/// Issued on a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn issue(user: User) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user,
        }
    }
}

/// Credentials submitted by a caller.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
