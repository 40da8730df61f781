use async_trait::async_trait;

use super::error::AuthError;
use crate::clients::UserClient;
use crate::domain::User;

/// Judges whether an email/password pair is valid.
///
/// The lockout engine never looks at passwords itself; it only consumes the
/// verdict and, on success, the user projection returned here.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `Some(user)` when the credentials match a registered user
    async fn verify(&self, email: &str, password: &str) -> Result<Option<User>, AuthError>;
}

/// Credential store backed by the user registry.
#[derive(Clone)]
pub struct UserCredentialStore {
    user_client: UserClient,
}

impl UserCredentialStore {
    pub fn new(user_client: UserClient) -> Self {
        Self { user_client }
    }
}

#[async_trait]
impl CredentialStore for UserCredentialStore {
    async fn verify(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
        self.user_client
            .find_by_credentials(email, password)
            .await
            .map_err(|e| AuthError::CredentialStore(e.to_string()))
    }
}
