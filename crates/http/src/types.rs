//! Request payloads for the auth and profile endpoints

use serde::{Deserialize, Serialize};

/// Credentials for `POST /login` and `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Payload for `PATCH /user/password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Payload for `PATCH /user/username`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameChangeRequest {
    pub password: String,
    pub new_username: String,
}
