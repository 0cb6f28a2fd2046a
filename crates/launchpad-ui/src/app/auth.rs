//! Redirect-based identity gateway.
//!
//! # Design
//! - Session state comes from the host page's bootstrap config; no requests are made.
//! - Login/logout mark the session as loading, then navigate away. A failed navigation
//!   clears the loading marker and reports the error to the (discarding) caller.

use crate::core::auth::{AuthError, AuthFuture, AuthGateway, LogoutOptions};
use crate::core::config::AuthEndpoints;
use crate::core::store::SessionStore;
use gloo::utils::window;

pub(crate) struct RedirectAuthGateway {
    endpoints: AuthEndpoints,
    session: SessionStore,
}

impl RedirectAuthGateway {
    pub(crate) const fn new(endpoints: AuthEndpoints, session: SessionStore) -> Self {
        Self { endpoints, session }
    }

    fn navigate(&self, url: String) -> AuthFuture {
        let session = self.session.clone();
        Box::pin(async move {
            session.begin_transition();
            let result = window()
                .location()
                .assign(&url)
                .map_err(|err| AuthError::Redirect {
                    url,
                    detail: format!("{err:?}"),
                });
            if result.is_err() {
                session.end_transition();
            }
            result
        })
    }
}

impl AuthGateway for RedirectAuthGateway {
    fn login(&self) -> AuthFuture {
        self.navigate(self.endpoints.login_url.clone())
    }

    fn logout(&self, options: LogoutOptions) -> AuthFuture {
        self.navigate(self.endpoints.logout_redirect(&options.return_to))
    }
}
