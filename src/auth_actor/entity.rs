use tracing::{info, warn};

use super::actions::{IdentityAction, IdentityActionResult};
use super::error::AuthError;
use crate::actor_framework::Entity;
use crate::domain::{LoginIdentity, LoginOutcome};

impl Entity for LoginIdentity {
    type Id = String;
    type CreateParams = ();
    type Patch = ();
    type Action = IdentityAction;
    type ActionResult = IdentityActionResult;
    type Error = AuthError;

    fn id(&self) -> &String {
        &self.key
    }

    fn from_create_params(id: String, _params: ()) -> Result<Self, AuthError> {
        Ok(LoginIdentity::new(id))
    }

    /// Every identity key implicitly starts out active with no failures.
    fn from_missing(id: &String) -> Option<Self> {
        Some(LoginIdentity::new(id.clone()))
    }

    /// An identity with no failures and no lock is indistinguishable from
    /// one never seen, so it is not kept.
    fn is_vacant(&self) -> bool {
        self.failed_attempts == 0 && !self.locked
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), AuthError> {
        Err(AuthError::Unsupported("identity updates"))
    }

    /// Outcomes, including lockouts, are returned as `Ok` so the counter
    /// and flag changes they imply are committed.
    fn handle_action(
        &mut self,
        action: IdentityAction,
    ) -> Result<IdentityActionResult, AuthError> {
        match action {
            IdentityAction::AttemptLogin { credentials_valid } => {
                let was_locked = self.locked;
                let outcome = self.record_attempt(credentials_valid);
                match outcome {
                    LoginOutcome::Locked if !was_locked => {
                        warn!(
                            identity = %self.key,
                            failed_attempts = self.failed_attempts,
                            "Identity locked after repeated failures"
                        );
                    }
                    LoginOutcome::Rejected => {
                        info!(
                            identity = %self.key,
                            failed_attempts = self.failed_attempts,
                            "Login attempt rejected"
                        );
                    }
                    _ => {}
                }
                Ok(IdentityActionResult::AttemptLogin {
                    outcome,
                    failed_attempts: self.failed_attempts,
                })
            }
            IdentityAction::Lock => {
                self.lock();
                info!(identity = %self.key, "Identity locked");
                Ok(IdentityActionResult::Lock)
            }
        }
    }
}
