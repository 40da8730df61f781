/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

/// Payload for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Payload for replacing a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserInfoRequest {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

impl CreateUserRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
        }
    }
}

/// Registry record: the public profile plus the stored password.
///
/// Passwords are kept as plain strings; these services never hash.
#[derive(Clone, PartialEq)]
pub struct UserAccount {
    pub user: User,
    pub password: String,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccount")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Full replacement of the editable profile fields.
#[derive(Debug, Clone)]
pub struct UserInfoPatch {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

impl From<UpdateUserInfoRequest> for UserInfoPatch {
    fn from(request: UpdateUserInfoRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
        }
    }
}
