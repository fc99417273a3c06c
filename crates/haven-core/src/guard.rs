//! Route table and the guard in front of the link dashboard.

use std::fmt;

use crate::session::{SessionSlot, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Signup,
    Dashboard,
    SmsOptIn,
    Terms,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::SmsOptIn => "/sms-opt-in",
            Self::Terms => "/terms",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        [
            Self::Root,
            Self::Login,
            Self::Signup,
            Self::Dashboard,
            Self::SmsOptIn,
            Self::Terms,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }

    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Decide whether `route` may render for the current session.
pub fn evaluate<S: SessionSlot>(route: Route, store: &SessionStore<S>) -> RouteDecision {
    let signed_in = store.is_authenticated();
    match route {
        Route::Root if signed_in => RouteDecision::Redirect(Route::Dashboard),
        Route::Root => RouteDecision::Redirect(Route::Login),
        Route::Dashboard if !signed_in => RouteDecision::Redirect(Route::Login),
        Route::Login | Route::Signup if signed_in => RouteDecision::Redirect(Route::Dashboard),
        other => RouteDecision::Render(other),
    }
}

/// Run `render` only when the guard lets `route` through.
///
/// Returns `Err(target)` with the redirect target otherwise.
pub fn guard<S, T, F>(route: Route, store: &SessionStore<S>, render: F) -> Result<T, Route>
where
    S: SessionSlot,
    F: FnOnce(&SessionStore<S>) -> T,
{
    match evaluate(route, store) {
        RouteDecision::Render(_) => Ok(render(store)),
        RouteDecision::Redirect(target) => {
            tracing::debug!(from = route.path(), to = target.path(), "Redirecting");
            Err(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionSlot;

    fn signed_in() -> SessionStore<MemorySessionSlot> {
        let mut store = SessionStore::rehydrate(MemorySessionSlot::default());
        store.login("token", None).unwrap();
        store
    }

    fn signed_out() -> SessionStore<MemorySessionSlot> {
        SessionStore::rehydrate(MemorySessionSlot::default())
    }

    #[test]
    fn dashboard_without_token_redirects_and_skips_render() {
        let store = signed_out();
        let mut rendered = false;

        let outcome = guard(Route::Dashboard, &store, |_| rendered = true);

        assert_eq!(outcome, Err(Route::Login));
        assert!(!rendered);
    }

    #[test]
    fn dashboard_with_token_renders() {
        let store = signed_in();
        let outcome = guard(Route::Dashboard, &store, |store| store.token().map(str::len));
        assert_eq!(outcome, Ok(Some(5)));
    }

    #[test]
    fn auth_screens_redirect_signed_in_sessions() {
        let store = signed_in();
        assert_eq!(
            evaluate(Route::Login, &store),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            evaluate(Route::Signup, &store),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn root_redirects_by_session_state() {
        assert_eq!(
            evaluate(Route::Root, &signed_out()),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            evaluate(Route::Root, &signed_in()),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn public_screens_always_render() {
        for route in [Route::Terms, Route::SmsOptIn] {
            assert_eq!(evaluate(route, &signed_out()), RouteDecision::Render(route));
            assert_eq!(evaluate(route, &signed_in()), RouteDecision::Render(route));
        }
    }

    #[test]
    fn route_paths_roundtrip() {
        assert_eq!(Route::from_path("/sms-opt-in/"), Some(Route::SmsOptIn));
        assert_eq!(Route::from_path("/"), Some(Route::Root));
        assert_eq!(Route::from_path("/admin"), None);
    }
}
