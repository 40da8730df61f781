use uuid::Uuid;

use super::actions::{UserAction, UserActionResult};
use super::error::UserError;
use super::policy::{check_email, SAME_PASSWORD};
use crate::actor_framework::Entity;
use crate::domain::{CreateUserRequest, User, UserAccount, UserInfoPatch};

/// Fresh user identifier.
pub fn next_user_id() -> String {
    Uuid::new_v4().to_string()
}

impl Entity for UserAccount {
    type Id = String;
    type CreateParams = CreateUserRequest;
    type Patch = UserInfoPatch;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Error = UserError;

    fn id(&self) -> &String {
        &self.user.id
    }

    /// Emails are unique across accounts and drive credential lookups.
    fn lookup_key(&self) -> Option<String> {
        Some(self.user.email.clone())
    }

    /// Creates a new account from registration parameters.
    ///
    /// Password strength is checked by the client, which owns the configured
    /// policy.
    fn from_create_params(id: String, params: CreateUserRequest) -> Result<Self, UserError> {
        check_email(&params.email)?;
        Ok(Self {
            user: User {
                id,
                email: params.email,
                first_name: params.first_name,
                last_name: params.last_name,
                phone_number: None,
            },
            password: params.password,
        })
    }

    /// Replaces first name, last name and phone number.
    fn on_update(&mut self, patch: UserInfoPatch) -> Result<(), UserError> {
        self.user.first_name = patch.first_name;
        self.user.last_name = patch.last_name;
        self.user.phone_number = patch.phone_number;
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<UserActionResult, UserError> {
        match action {
            UserAction::ChangePassword(new_password) => {
                if new_password == self.password {
                    return Err(UserError::ValidationError(SAME_PASSWORD.to_string()));
                }
                self.password = new_password;
                Ok(UserActionResult::ChangePassword)
            }
            UserAction::VerifyPassword(candidate) => {
                Ok(UserActionResult::VerifyPassword(candidate == self.password))
            }
        }
    }
}
