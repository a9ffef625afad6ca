//! Auth and profile endpoint methods

use super::{error::ClientError, DepotClient};
use crate::types::{LoginRequest, PasswordChangeRequest, UsernameChangeRequest};
use depot_core::{ApiResponse, AuthUser};
use reqwest::Method;

impl DepotClient {
    /// Get the currently authenticated user
    ///
    /// Fails with [`ClientError::AuthRejected`] when no valid session
    /// cookie is present.
    pub async fn current_user(&self) -> Result<AuthUser, ClientError> {
        let request = self.request(Method::GET, "/user");
        self.execute(request).await
    }

    /// Log in with login and password
    ///
    /// A rejected login is not an `Err`: the server answers with the
    /// envelope (`success: false` plus `detail`/`err_id`) and that envelope
    /// is returned as-is for display.
    pub async fn login(&self, credentials: LoginRequest) -> Result<ApiResponse, ClientError> {
        let request = self.request(Method::POST, "/login").json(&credentials);
        self.execute_envelope(request).await
    }

    /// Register a new account; same envelope contract as [`login`](Self::login)
    pub async fn register(&self, credentials: LoginRequest) -> Result<ApiResponse, ClientError> {
        let request = self.request(Method::POST, "/register").json(&credentials);
        self.execute_envelope(request).await
    }

    /// Clear the server-side session
    pub async fn logout(&self) -> Result<ApiResponse, ClientError> {
        let request = self.request(Method::POST, "/logout");
        self.execute_envelope(request).await
    }

    /// Change the account password
    pub async fn change_password(
        &self,
        payload: PasswordChangeRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::PATCH, "/user/password")
            .json(&payload);
        self.execute_envelope(request).await
    }

    /// Change the display username
    pub async fn change_username(
        &self,
        payload: UsernameChangeRequest,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .request(Method::PATCH, "/user/username")
            .json(&payload);
        self.execute_envelope(request).await
    }
}
