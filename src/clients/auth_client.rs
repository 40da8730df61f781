use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::app_system::{LoginResult, ServiceResult};
use crate::auth_actor::{AuthError, CredentialStore, IdentityAction, IdentityActionResult};
use crate::domain::{LoginIdentity, LoginOutcome, LoginRequest, Session};

/// Client for the login lockout engine.
#[derive(Clone)]
pub struct AuthClient {
    inner: ResourceClient<LoginIdentity>,
    credentials: Arc<dyn CredentialStore>,
}

impl AuthClient {
    pub fn new(
        inner: ResourceClient<LoginIdentity>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self { inner, credentials }
    }

    /// Records one attempt whose credentials were already checked.
    ///
    /// # Errors
    /// `AccountLocked` if the identity was locked or becomes locked by this
    /// attempt, `InvalidCredentials` for any other failure.
    #[instrument(skip(self))]
    pub async fn attempt_login(
        &self,
        identity: String,
        credentials_valid: bool,
    ) -> Result<(), AuthError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(identity.clone(), IdentityAction::AttemptLogin { credentials_valid })
            .await?;
        match result {
            IdentityActionResult::AttemptLogin { outcome: LoginOutcome::Accepted, .. } => Ok(()),
            IdentityActionResult::AttemptLogin { outcome: LoginOutcome::Rejected, .. } => {
                Err(AuthError::InvalidCredentials)
            }
            IdentityActionResult::AttemptLogin { outcome: LoginOutcome::Locked, .. } => {
                Err(AuthError::AccountLocked(identity))
            }
            IdentityActionResult::Lock => Err(AuthError::ActorCommunicationError(
                "unexpected reply to a login attempt".to_string(),
            )),
        }
    }

    /// Locks an identity, seen before or not. Idempotent.
    #[instrument(skip(self))]
    pub async fn lock(&self, identity: String) -> Result<(), AuthError> {
        debug!("Sending request");
        self.inner.perform_action(identity, IdentityAction::Lock).await?;
        Ok(())
    }

    /// Current bookkeeping for an identity; unseen identities read as fresh.
    #[instrument(skip(self))]
    pub async fn identity_state(&self, identity: String) -> Result<LoginIdentity, AuthError> {
        debug!("Sending request");
        let state = self.inner.get(identity.clone()).await?;
        Ok(state.unwrap_or_else(|| LoginIdentity::new(identity)))
    }

    /// Full login: asks the credential store, then runs the lockout engine.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> LoginResult {
        let result = self.try_login(request).await;
        match &result {
            Ok(session) => info!(user_id = %session.user.id, "Login succeeded"),
            Err(e) => warn!(error = %e, "Login failed"),
        }
        ServiceResult::from_result(result)
    }

    async fn try_login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        let user = self.credentials.verify(&request.email, &request.password).await?;
        self.attempt_login(request.email, user.is_some()).await?;
        user.map(Session::issue).ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::auth_actor::ACCOUNT_LOCKED;
    use crate::domain::{User, LOCKOUT_THRESHOLD};
    use async_trait::async_trait;

    /// Accepts exactly one email/password pair.
    struct FixedCredentials {
        user: User,
        password: &'static str,
    }

    #[async_trait]
    impl CredentialStore for FixedCredentials {
        async fn verify(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
            let matches = email == self.user.email && password == self.password;
            Ok(matches.then(|| self.user.clone()))
        }
    }

    fn spawn_auth_client() -> AuthClient {
        let (actor, inner) = ResourceActor::<LoginIdentity>::new("login_identity", 10);
        tokio::spawn(actor.run());
        let credentials = FixedCredentials {
            user: User {
                id: "user_1".into(),
                email: "test@example.com".into(),
                first_name: "Test".into(),
                last_name: "User".into(),
                phone_number: None,
            },
            password: "correctpassword",
        };
        AuthClient::new(inner, Arc::new(credentials))
    }

    fn wrong_password() -> LoginRequest {
        LoginRequest::new("test@example.com", "wrongpassword")
    }

    #[tokio::test]
    async fn test_login_valid_credentials() {
        let client = spawn_auth_client();
        let result = client.login(LoginRequest::new("test@example.com", "correctpassword")).await;
        assert!(result.success);
        let session = result.data.unwrap();
        assert!(!session.token.is_empty());
        assert_eq!(session.user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_failures_below_threshold_carry_no_message() {
        let client = spawn_auth_client();
        for _ in 0..LOCKOUT_THRESHOLD - 1 {
            let result = client.login(wrong_password()).await;
            assert!(!result.success);
            assert_eq!(result.error_message, None);
            assert!(result.errors.is_empty());
        }
        let state = client.identity_state("test@example.com".into()).await.unwrap();
        assert_eq!(state.failed_attempts, 4);
        assert!(!state.locked);
    }

    #[tokio::test]
    async fn test_account_lockout_after_failed_attempts() {
        let client = spawn_auth_client();
        for _ in 0..LOCKOUT_THRESHOLD - 1 {
            client.login(wrong_password()).await;
        }

        let result = client.login(wrong_password()).await;
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some(ACCOUNT_LOCKED));

        let result = client.login(LoginRequest::new("test@example.com", "correctpassword")).await;
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some(ACCOUNT_LOCKED));
        assert!(client.identity_state("test@example.com".into()).await.unwrap().locked);
    }

    #[tokio::test]
    async fn test_success_resets_failed_attempts() {
        let client = spawn_auth_client();
        for _ in 0..3 {
            client.login(wrong_password()).await;
        }
        let result = client.login(LoginRequest::new("test@example.com", "correctpassword")).await;
        assert!(result.success);
        let state = client.identity_state("test@example.com".into()).await.unwrap();
        assert_eq!(state.failed_attempts, 0);
    }

    #[tokio::test]
    async fn test_only_identities_with_history_are_stored() {
        let client = spawn_auth_client();

        // A successful login leaves nothing behind; any failure is recorded
        let correct = LoginRequest::new("test@example.com", "correctpassword");
        assert!(client.login(correct.clone()).await.success);
        assert_eq!(client.inner.count().await, Ok(0));

        client.login(LoginRequest::new("stranger@test.com", "whatever")).await;
        assert_eq!(client.inner.count().await, Ok(1));

        client.login(wrong_password()).await;
        assert_eq!(client.inner.count().await, Ok(2));

        // A success wipes the failure history, and with it the record
        assert!(client.login(correct).await.success);
        assert_eq!(client.inner.count().await, Ok(1));

        client.lock("test@example.com".into()).await.unwrap();
        assert_eq!(client.inner.count().await, Ok(2));
    }

    #[tokio::test]
    async fn test_attempt_login_outcomes() {
        let client = spawn_auth_client();
        let identity = "someone@test.com".to_string();
        assert_eq!(client.attempt_login(identity.clone(), true).await, Ok(()));
        for _ in 0..4 {
            let result = client.attempt_login(identity.clone(), false).await;
            assert_eq!(result, Err(AuthError::InvalidCredentials));
        }
        assert_eq!(
            client.attempt_login(identity.clone(), false).await,
            Err(AuthError::AccountLocked(identity))
        );
    }

    #[tokio::test]
    async fn test_lock_unseen_identity() {
        let client = spawn_auth_client();
        let fresh = client.identity_state("nobody@test.com".into()).await.unwrap();
        assert_eq!(fresh, LoginIdentity::new("nobody@test.com"));

        client.lock("nobody@test.com".into()).await.unwrap();
        client.lock("nobody@test.com".into()).await.unwrap();
        assert_eq!(
            client.attempt_login("nobody@test.com".into(), true).await,
            Err(AuthError::AccountLocked("nobody@test.com".into()))
        );
    }
}
