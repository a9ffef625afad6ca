//! Session-owning auth store
//!
//! Single source of truth for "who is logged in". All mutation of the
//! session happens through the methods here. Remote failures never escape
//! as errors to callers; they become a cleared session or a displayable
//! [`ApiResponse`] envelope.

use depot_core::{ApiResponse, AuthUser};
use depot_http::types::{LoginRequest, PasswordChangeRequest, UsernameChangeRequest};
use depot_http::{ClientError, DepotClient};
use tracing::{debug, error, warn};

/// Auth store holding the current session
///
/// Construct one per application instance and hand it to the
/// [`RouteGuard`](crate::RouteGuard); there is deliberately no global
/// singleton. `&mut` access serializes mutation the way the browser's
/// navigation pipeline serializes guard runs.
pub struct AuthStore {
    client: DepotClient,
    user: Option<AuthUser>,
    loading: bool,
}

impl AuthStore {
    pub fn new(client: DepotClient) -> Self {
        Self {
            client,
            user: None,
            loading: false,
        }
    }

    /// The current session, if any
    pub fn session(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Derived on read from the session value
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True only while a session fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Refresh the session from `GET /user`
    ///
    /// On success the session is replaced with the returned user. A
    /// transport failure, rejected session or malformed response clears it
    /// silently; none of those are errors at this layer. The only `Err`
    /// is a misconfigured client, which the guard handles as an
    /// unexpected failure.
    pub async fn fetch_session(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.client.current_user().await;
        self.loading = false;

        match result {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(err) if err.is_session_collapse() => {
                debug!(error = %err, "session fetch failed, treating as anonymous");
                self.user = None;
                Ok(())
            }
            Err(err) => {
                self.user = None;
                Err(err)
            }
        }
    }

    /// Log in with the given credentials
    ///
    /// Does not populate the session itself; the next guard run (or an
    /// explicit [`fetch_session`](Self::fetch_session)) picks up the new
    /// cookie. Rejections come back as the server's envelope, transport
    /// failures as a local fallback envelope.
    pub async fn login(&mut self, credentials: LoginRequest) -> ApiResponse {
        self.envelope_call(self.client.login(credentials).await, "Could not log in")
    }

    /// Register a new account; same contract as [`login`](Self::login)
    pub async fn register(&mut self, credentials: LoginRequest) -> ApiResponse {
        self.envelope_call(self.client.register(credentials).await, "Could not register")
    }

    /// Change the account password
    pub async fn change_password(&mut self, payload: PasswordChangeRequest) -> ApiResponse {
        self.envelope_call(
            self.client.change_password(payload).await,
            "Could not change the password",
        )
    }

    /// Change the display username
    pub async fn change_username(&mut self, payload: UsernameChangeRequest) -> ApiResponse {
        self.envelope_call(
            self.client.change_username(payload).await,
            "Could not change the username",
        )
    }

    /// Log out, best-effort
    ///
    /// The session is cleared locally whatever the server says; a failed
    /// logout call must not leave the UI looking signed in.
    pub async fn logout(&mut self) {
        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "logout request failed, clearing session anyway");
        }
        self.user = None;
    }

    /// Clear the session locally without a network call
    ///
    /// Recovery hatch for the guard when a refresh fails unexpectedly.
    pub fn reset(&mut self) {
        if self.user.is_some() {
            debug!("resetting session state");
        }
        self.user = None;
        self.loading = false;
    }

    fn envelope_call(
        &self,
        result: Result<ApiResponse, ClientError>,
        fallback: &str,
    ) -> ApiResponse {
        match result {
            Ok(envelope) => envelope,
            Err(err) => {
                error!(error = %err, "auth request failed before reaching the server");
                ApiResponse::transport_failure(format!("{fallback} (network error)."))
            }
        }
    }
}
