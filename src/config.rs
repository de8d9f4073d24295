//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Base URL of the Todoist REST API. Resource paths (`projects`, `labels`, `tasks`) are appended to it.
pub const DEFAULT_API_BASE_URL: &str = "https://beta.todoist.com/API/v8/";

/// The `User-Agent` sent with every request.
/// Feel free to override it when initing this library.
pub static USER_AGENT: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(format!("taskdeck/{}", env!("CARGO_PKG_VERSION")))));

/// Returns the current value of [`USER_AGENT`]
pub(crate) fn user_agent() -> String {
    match USER_AGENT.lock() {
        Ok(ua) => ua.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// What a [`SessionGate`](crate::session::SessionGate) does when a gated call finds no token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Fire an authentication attempt and delegate the call right away, with whatever token is held (possibly none).
    ///
    /// The first calls of a session usually fail, since the attempt has not resolved yet.
    Race,
    /// Fire (or join) an authentication attempt and wait for it to settle before delegating the call
    WaitForAuthentication,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        AuthPolicy::Race
    }
}
