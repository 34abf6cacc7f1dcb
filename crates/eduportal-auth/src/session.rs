//! Session store.
//!
//! Holds the signed-in user for one client and mirrors it to a
//! [`SessionStorage`] backend. Callers receive the store explicitly and read
//! snapshots of its [`SessionState`]; nothing here is global.
//!
//! Lifecycle:
//!
//! ```text
//! Loading ──bootstrap──▶ Authenticated | Unauthenticated
//!                 login ──▶ Authenticated
//!      logout / 401 ──▶ Unauthenticated
//! ```
//!
//! Until [`SessionStore::bootstrap`] finishes the state is `Loading` and
//! guards must not decide access.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, info, warn};

use eduportal_config::{JwtConfig, SessionConfig};
use eduportal_core::AppError;
use eduportal_models::{AuthStatus, LoginResponse, SessionUser};

use crate::jwt::session_user_from_token;
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn status(&self) -> AuthStatus<'_> {
        match self {
            SessionState::Loading => AuthStatus::Loading,
            SessionState::Unauthenticated => AuthStatus::Anonymous,
            SessionState::Authenticated(session) => AuthStatus::Authenticated(&session.user),
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.status().user()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Confirms a restored session is still valid and returns the current user.
///
/// An error means the token was rejected (the 401 path) and the persisted
/// session is discarded.
pub trait SessionValidator {
    fn validate(&self, session: &Session)
    -> impl Future<Output = Result<SessionUser, AppError>> + Send;
}

/// Validates restored sessions by verifying the token signature and expiry.
///
/// The user embedded in the token wins over the persisted copy, so role
/// changes take effect on the next bootstrap.
#[derive(Debug, Clone)]
pub struct JwtSessionValidator {
    jwt_config: JwtConfig,
}

impl JwtSessionValidator {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self { jwt_config }
    }
}

impl SessionValidator for JwtSessionValidator {
    fn validate(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<SessionUser, AppError>> + Send {
        let result = session_user_from_token(&session.token, &self.jwt_config);
        async move { result }
    }
}

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionState>,
    bootstrap_timeout: Duration,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>, config: &SessionConfig) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::Loading),
            bootstrap_timeout: config.bootstrap_timeout,
        }
    }

    /// A copy of the current state. Later transitions do not affect it.
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.snapshot().user().cloned()
    }

    fn set_state(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Reads the persisted session. Missing or malformed entries yield `None`.
    pub fn restore(&self) -> Option<Session> {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => {
                debug!("No persisted session token");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Unreadable session storage, treating as signed out");
                return None;
            }
        };

        let raw_user = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                warn!("Persisted session has a token but no user");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Unreadable session storage, treating as signed out");
                return None;
            }
        };

        match serde_json::from_str::<SessionUser>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                warn!(error = %e, "Malformed persisted user, treating as signed out");
                None
            }
        }
    }

    /// Restores the persisted session and validates it.
    ///
    /// Rejection clears storage. A validator that does not answer within the
    /// configured timeout leaves storage alone but still resolves to
    /// `Unauthenticated`, so the caller never waits indefinitely.
    pub async fn bootstrap<V>(&self, validator: &V) -> SessionState
    where
        V: SessionValidator,
    {
        self.set_state(SessionState::Loading);

        let Some(session) = self.restore() else {
            self.set_state(SessionState::Unauthenticated);
            return SessionState::Unauthenticated;
        };

        match tokio::time::timeout(self.bootstrap_timeout, validator.validate(&session)).await {
            Ok(Ok(user)) => {
                let session = Session {
                    token: session.token,
                    user,
                };
                self.persist(&session);
                info!(email = %session.user.email, role = %session.user.role, "Session restored");
                let state = SessionState::Authenticated(session);
                self.set_state(state.clone());
                state
            }
            Ok(Err(e)) => {
                info!(error = %e.error, "Persisted session rejected");
                self.logout();
                SessionState::Unauthenticated
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.bootstrap_timeout.as_millis() as u64,
                    "Session validation timed out"
                );
                self.set_state(SessionState::Unauthenticated);
                SessionState::Unauthenticated
            }
        }
    }

    /// Restores the persisted session without contacting a validator.
    pub fn bootstrap_local(&self) -> SessionState {
        let state = match self.restore() {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Unauthenticated,
        };
        self.set_state(state.clone());
        state
    }

    /// Accepts a login response from the auth backend.
    ///
    /// # Errors
    ///
    /// Unauthorized if the response carries an empty token or an unknown
    /// role. The previous state is left untouched in that case.
    pub fn login(&self, response: LoginResponse) -> Result<SessionUser, AppError> {
        if response.token.trim().is_empty() {
            return Err(AppError::unauthorized(
                "Login response is missing a token".to_string(),
            ));
        }

        let user = SessionUser::try_from(response.user)
            .map_err(|e| AppError::unauthorized(format!("Login rejected: {}", e)))?;

        let session = Session {
            token: response.token,
            user: user.clone(),
        };
        self.persist(&session);
        info!(email = %user.email, role = %user.role, "Signed in");
        self.set_state(SessionState::Authenticated(session));
        Ok(user)
    }

    /// Clears memory and storage. The in-memory state is cleared first so no
    /// check after this call can observe the old permissions.
    pub fn logout(&self) {
        self.set_state(SessionState::Unauthenticated);
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(error = %e, key, "Failed to clear persisted session entry");
            }
        }
    }

    /// Reaction to a 401 from any backend call.
    pub fn handle_unauthorized(&self) {
        info!("Session invalidated by backend");
        self.logout();
    }

    fn persist(&self, session: &Session) {
        let user_json = match serde_json::to_string(&session.user) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session user");
                return;
            }
        };

        if let Err(e) = self
            .storage
            .set(TOKEN_KEY, &session.token)
            .and_then(|_| self.storage.set(USER_KEY, &user_json))
        {
            warn!(error = %e, "Failed to persist session; it will not survive a restart");
        }
    }
}
