//! Login redirect capability.

/// Route the user is sent to when credentials can no longer be refreshed.
pub const LOGIN_ROUTE: &str = "/login";

/// Sends the user back to the login entry point.
///
/// A browser host performs a navigation; a terminal host tells the user to
/// log in again. Any `Fn(&str)` closure is a `LoginRedirect`.
pub trait LoginRedirect: Send + Sync {
    /// Invoked with [`LOGIN_ROUTE`] after credentials have been cleared.
    fn redirect_to_login(&self, route: &str);
}

impl<F> LoginRedirect for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect_to_login(&self, route: &str) {
        self(route)
    }
}
