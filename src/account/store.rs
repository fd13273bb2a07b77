//! Account store: owns the authenticated identity and drives the
//! login / logout / session-restore state machine.
//!
//! Phases: `Anonymous -> Authenticating -> Authenticated` (login),
//! `Authenticated -> Anonymous` (logout), and
//! `Anonymous -> Restoring -> {Authenticated | Anonymous}` at startup.
//! Every login failure is recoverable: the store returns to `Anonymous` with
//! the error retained for display.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiOutcome};
use crate::common::error::login_error_message;
use crate::common::{safe_email_log, Resource, StoreError, Validator};

use super::models::{
    AuthPhase, AuthSession, LoginRequest, ProfilePayload, Role, UpdateProfileRequest, User,
};
use super::storage::SessionStorage;
use super::validators::LoginValidator;

/// Client-side abort for the login round-trip. The only operation with an
/// explicit timeout; everything else rides the transport default.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(15);

pub struct AccountStore {
    client: Arc<ApiClient>,
    storage: SessionStorage,
    phase: AuthPhase,
    session: Option<AuthSession>,
    error: Option<StoreError>,
    /// Candidate profile as last fetched from the backend.
    profile: Resource<Option<User>>,
}

impl AccountStore {
    pub fn new(client: Arc<ApiClient>, storage: SessionStorage) -> Self {
        Self {
            client,
            storage,
            phase: AuthPhase::Anonymous,
            session: None,
            error: None,
            profile: Resource::new(None),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// Holds iff both token and user are present; they live in one
    /// `AuthSession` and can never be set or cleared separately.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn profile(&self) -> &Resource<Option<User>> {
        &self.profile
    }

    // ========================================================================
    // Login / Logout / Restore
    // ========================================================================

    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), StoreError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let validation = LoginValidator.validate(&request);
        if !validation.is_valid {
            let error = StoreError::from(validation);
            self.error = Some(error.clone());
            return Err(error);
        }

        info!(email = %safe_email_log(&request.email), role = ?role, "logging in");
        self.phase = AuthPhase::Authenticating;
        self.error = None;

        let path = format!("/auth/{}/login/public", role.auth_segment());
        let body = json!({ "email": request.email, "password": request.password });

        let outcome = self
            .client
            .post_with_timeout::<Value>(&path, None, body, LOGIN_TIMEOUT)
            .await;

        let result = match outcome {
            Ok(ApiOutcome::Success(body)) => parse_login_response(&body, role),
            Ok(ApiOutcome::Failure { status, message }) => Err(StoreError::Http {
                status,
                message: login_error_message(status, message.as_deref()),
            }),
            Err(e) => Err(e),
        };

        match result {
            Ok(session) => {
                if let Err(e) = self.storage.save(&session) {
                    // Session still works for this run; it just won't survive
                    // a restart.
                    warn!(error = %e, "failed to persist session");
                }
                info!(user_id = %session.user.id, "login succeeded");
                self.session = Some(session);
                self.phase = AuthPhase::Authenticated;
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "login failed");
                self.session = None;
                self.phase = AuthPhase::Anonymous;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Clears the persisted session and resets to `Anonymous`. No network
    /// call; always succeeds.
    pub fn logout(&mut self) {
        info!("logging out");
        self.storage.clear();
        self.session = None;
        self.error = None;
        self.phase = AuthPhase::Anonymous;
        self.profile.reset(None);
    }

    /// Rehydrates the persisted session at startup, without a network
    /// round-trip. Corrupt storage is wiped by the storage layer and the
    /// store stays `Anonymous`.
    pub fn restore_session(&mut self) {
        self.phase = AuthPhase::Restoring;
        match self.storage.load() {
            Some(session) => {
                info!(user_id = %session.user.id, "session restored");
                self.session = Some(session);
                self.phase = AuthPhase::Authenticated;
            }
            None => {
                debug!("no persisted session");
                self.phase = AuthPhase::Anonymous;
            }
        }
    }

    // ========================================================================
    // Candidate Profile
    // ========================================================================

    pub async fn fetch_profile(&mut self) -> Result<(), StoreError> {
        let token = match self.token() {
            Some(token) => token.to_string(),
            None => return Err(StoreError::Validation("Not signed in".to_string())),
        };

        let ticket = self.profile.begin();
        let result = self
            .client
            .get::<ProfilePayload>("/candidates/profile", Some(&token))
            .await
            .and_then(ApiOutcome::into_result);

        match result {
            Ok(payload) => {
                let user = payload.into_user(Role::Candidate);
                self.profile.resolve(ticket, Ok(Some(user)));
                Ok(())
            }
            Err(e) => {
                self.profile.fail(ticket, e.clone());
                Err(e)
            }
        }
    }

    /// Updates the candidate profile and keeps the persisted session's user
    /// in sync with the fields the backend confirmed.
    pub async fn update_profile(
        &mut self,
        changes: UpdateProfileRequest,
    ) -> Result<(), StoreError> {
        let token = match self.token() {
            Some(token) => token.to_string(),
            None => return Err(StoreError::Validation("Not signed in".to_string())),
        };

        let ticket = self.profile.begin();
        let result = self
            .client
            .put::<ProfilePayload>("/candidates/profile", Some(&token), changes.to_body())
            .await
            .and_then(ApiOutcome::into_result);

        match result {
            Ok(payload) => {
                let user = payload.into_user(Role::Candidate);
                if let Some(session) = self.session.as_mut() {
                    if session.user.id == user.id {
                        session.user = user.clone();
                        if let Err(e) = self.storage.save(session) {
                            warn!(error = %e, "failed to persist updated profile");
                        }
                    }
                }
                self.profile.resolve(ticket, Ok(Some(user)));
                Ok(())
            }
            Err(e) => {
                self.profile.fail(ticket, e.clone());
                Err(e)
            }
        }
    }
}

/// A successful login must carry a token and the role-matching profile
/// object; anything else is a malformed response, never a crash.
fn parse_login_response(body: &Value, role: Role) -> Result<AuthSession, StoreError> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());
    let profile = body.get(role.profile_key());

    match (token, profile) {
        (Some(token), Some(profile)) => {
            let payload: ProfilePayload = serde_json::from_value(profile.clone())
                .map_err(|_| StoreError::malformed_response())?;
            Ok(AuthSession {
                token: token.to_string(),
                user: payload.into_user(role),
            })
        }
        (token, profile) => {
            warn!(
                has_token = token.is_some(),
                has_profile = profile.is_some(),
                "login response missing required fields"
            );
            Err(StoreError::malformed_response())
        }
    }
}
