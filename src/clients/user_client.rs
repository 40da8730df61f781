use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::app_system::ServiceResult;
use crate::domain::{CreateUserRequest, UpdateUserInfoRequest, User, UserAccount};
use crate::user_actor::{check_email, PasswordPolicy, UserAction, UserActionResult, UserError};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserAccount>,
    policy: PasswordPolicy,
}

impl UserClient {
    pub fn new(inner: ResourceClient<UserAccount>, policy: PasswordPolicy) -> Self {
        Self { inner, policy }
    }

    /// Registers a user.
    ///
    /// A malformed email is an `Err`; every business-rule failure, including
    /// an email that is already registered, comes back inside the envelope.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<ServiceResult<User>, UserError> {
        debug!("Sending request");
        check_email(&request.email)?;
        if let Err(e) = self.policy.check(&request.password) {
            warn!("Rejected weak password");
            return Ok(ServiceResult::from_error(e));
        }

        match self.inner.create(request).await.map_err(UserError::from) {
            Ok(account) => {
                info!(user_id = %account.user.id, "User registered");
                Ok(ServiceResult::ok(account.user))
            }
            Err(e @ UserError::InvalidArgument(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "User registration failed");
                Ok(ServiceResult::from_error(e))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_user_info(&self, id: String) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let account = self.inner.get(id).await?;
        Ok(account.map(|account| account.user))
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn update_user_info(&self, request: UpdateUserInfoRequest) -> ServiceResult<User> {
        debug!("Sending request");
        let id = request.user_id.clone();
        let result = self
            .inner
            .update(id, request.into())
            .await
            .map(|account| account.user)
            .map_err(UserError::from);
        ServiceResult::from_result(result)
    }

    #[instrument(skip(self, new_password))]
    pub async fn force_password_change(
        &self,
        user_id: String,
        new_password: String,
    ) -> ServiceResult<()> {
        debug!("Sending request");
        if let Err(e) = self.policy.check(&new_password) {
            warn!("Rejected weak password");
            return ServiceResult::from_error(e);
        }
        let result = self
            .inner
            .perform_action(user_id, UserAction::ChangePassword(new_password))
            .await
            .map(|_| ())
            .map_err(UserError::from);
        ServiceResult::from_result(result)
    }

    /// False for unknown users as well as for wrong passwords.
    #[instrument(skip(self, password))]
    pub async fn verify_password(
        &self,
        user_id: String,
        password: String,
    ) -> Result<bool, UserError> {
        debug!("Sending request");
        let action = UserAction::VerifyPassword(password);
        match self.inner.perform_action(user_id, action).await {
            Ok(UserActionResult::VerifyPassword(matches)) => Ok(matches),
            Ok(other) => Err(UserError::ActorCommunicationError(format!(
                "Unexpected result: {other:?}"
            ))),
            Err(e) => match UserError::from(e) {
                UserError::NotFound(_) => Ok(false),
                e => Err(e),
            },
        }
    }

    /// Looks the account up by email and compares the stored password.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let account = self.inner.find_by_key(email).await?;
        Ok(account
            .filter(|account| account.password == password)
            .map(|account| account.user))
    }
}
