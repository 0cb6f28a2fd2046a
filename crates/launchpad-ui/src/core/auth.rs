//! Authentication boundary consumed by the launcher menu.
//!
//! # Design
//! - Keep auth state as simple data so stores can publish it without side effects.
//! - Login/logout are async at the gateway; callers fire them and discard the outcome.
//!   The menu never awaits or reacts to a failed login/logout.
//! - No DOM or network access here; concrete gateways live in the wasm app.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thiserror::Error;

/// Label shown when no signed-in identity is available.
pub const LOGIN_LABEL: &str = "Login";

/// Snapshot of the session as published by the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Whether a user session is active.
    pub is_authenticated: bool,
    /// Whether a login/logout transition is in flight.
    pub is_loading: bool,
    /// Display name of the signed-in user, when known.
    pub user_name: Option<String>,
}

impl AuthState {
    /// Signed-in state for the given user name.
    #[must_use]
    pub fn signed_in(user_name: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user_name: Some(user_name.into()),
        }
    }

    /// Label for identity surfaces: the user name when signed in, otherwise "Login".
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.user_name, self.is_authenticated) {
            (Some(name), true) if !name.trim().is_empty() => name,
            _ => LOGIN_LABEL,
        }
    }
}

/// Options for ending a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutOptions {
    /// URL the identity provider should return the browser to.
    pub return_to: String,
}

/// Failures a gateway may report; callers log and discard them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The browser could not be redirected to the identity provider.
    #[error("redirect to {url} failed: {detail}")]
    Redirect {
        /// Target URL of the failed redirect.
        url: String,
        /// Browser-reported detail.
        detail: String,
    },
    /// The gateway is not able to serve requests.
    #[error("authentication gateway unavailable: {0}")]
    Unavailable(String),
}

/// Future returned by gateway operations.
pub type AuthFuture = Pin<Box<dyn Future<Output = Result<(), AuthError>>>>;

/// Identity provider contract consumed by the shell.
pub trait AuthGateway {
    /// Start an interactive login.
    fn login(&self) -> AuthFuture;
    /// End the current session and return to `options.return_to`.
    fn logout(&self, options: LogoutOptions) -> AuthFuture;
}

/// Shareable gateway handle usable as a component prop.
#[derive(Clone)]
pub struct AuthHandle {
    gateway: Rc<dyn AuthGateway>,
}

impl AuthHandle {
    /// Wrap a gateway implementation.
    pub fn new(gateway: impl AuthGateway + 'static) -> Self {
        Self {
            gateway: Rc::new(gateway),
        }
    }

    /// Hand a command to the gateway and return its request future.
    #[must_use]
    pub fn dispatch(&self, command: AuthCommand) -> AuthFuture {
        match command {
            AuthCommand::Login => self.gateway.login(),
            AuthCommand::Logout { return_to } => self.gateway.logout(LogoutOptions { return_to }),
        }
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.gateway).cast::<()>() == Rc::as_ptr(&other.gateway).cast::<()>()
    }
}

impl fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHandle").finish_non_exhaustive()
    }
}

/// Session command produced by menu activations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCommand {
    /// Begin login.
    Login,
    /// End the session and return to the given URL.
    Logout {
        /// URL to return to after logout.
        return_to: String,
    },
}
