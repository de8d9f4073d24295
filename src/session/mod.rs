//! This module holds the credentials of a session, and gates every API call behind them
//!
//! A [`SessionGate`] starts without any token. The first API call it gets fires an authentication attempt in the background.
//! Depending on its [`AuthPolicy`], the call is then either delegated right away (and will probably fail, since the attempt has not resolved yet),
//! or delegated once the attempt has settled.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AuthPolicy;
use crate::error::NetworkResult;
use crate::token::Token;
use crate::traits::{Authenticator, TodoSource, TodoistService};
use crate::{Label, Project, Task};

pub mod state;
pub use state::SessionState;
use state::{StateReceiver, StateSender};
mod static_token;
pub use static_token::StaticTokenAuthenticator;


/// A [`TodoistService`] that lazily authenticates, then forwards calls to a [`TodoSource`] along with the current token.
///
/// Authentication attempts are spawned on the current tokio runtime.
#[derive(Debug)]
pub struct SessionGate<S, A>
where
    S: TodoSource + Send + Sync,
    A: Authenticator + Send + Sync + 'static,
{
    /// Where the data comes from (usually a [`Client`](crate::client::Client))
    source: S,
    authenticator: Arc<A>,
    /// Also shared with the running authentication attempt, if any
    state: Arc<StateSender>,
    policy: AuthPolicy,
}

impl<S, A> SessionGate<S, A>
where
    S: TodoSource + Send + Sync,
    A: Authenticator + Send + Sync + 'static,
{
    /// Create a gate that has no token yet, using the default [`AuthPolicy`]
    pub fn new(source: S, authenticator: A) -> Self {
        Self::with_policy(source, authenticator, AuthPolicy::default())
    }

    pub fn with_policy(source: S, authenticator: A, policy: AuthPolicy) -> Self {
        let (sender, _) = state::state_channel();
        Self {
            source,
            authenticator: Arc::new(authenticator),
            state: Arc::new(sender),
            policy,
        }
    }

    pub fn source(&self) -> &S { &self.source }
    pub fn policy(&self) -> AuthPolicy { self.policy }

    /// A snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Get a receiver that is notified of every state change of this gate
    pub fn subscribe(&self) -> StateReceiver {
        self.state.subscribe()
    }

    fn current_token(&self) -> Option<Token> {
        self.state.borrow().token().cloned()
    }

    /// Fire an authentication attempt, unless a token is held or an attempt is running already.
    ///
    /// Returns whether a new attempt has been fired.
    fn start_authentication(&self) -> bool {
        let fired = self.state.send_if_modified(|state| match state {
            SessionState::Unauthenticated => {
                *state = SessionState::Authenticating;
                true
            },
            _ => false,
        });
        if fired == false {
            return false;
        }

        log::info!("No token yet, starting an authentication attempt");
        let authenticator = Arc::clone(&self.authenticator);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            // The attempt runs in its own task, so that a panicking or cancelled flow still settles the state
            let attempt = tokio::spawn(async move {
                authenticator.authenticate().await
            });
            let new_state = match attempt.await {
                Ok(Ok(token)) => {
                    log::info!("Authentication succeeded");
                    SessionState::Authenticated(token)
                },
                Ok(Err(err)) => {
                    log::warn!("Authentication failed: {}", err);
                    SessionState::Unauthenticated
                },
                Err(err) => {
                    log::warn!("Authentication attempt aborted: {}", err);
                    SessionState::Unauthenticated
                },
            };
            state.send_replace(new_state);
        });
        true
    }

    /// Wait until no authentication attempt is running, and return the state at that point
    pub async fn wait_for_authentication(&self) -> SessionState {
        let mut receiver = self.state.subscribe();
        loop {
            let current = receiver.borrow_and_update().clone();
            if current.is_settled() {
                return current;
            }
            if receiver.changed().await.is_err() {
                // The sender is owned by `self`, this cannot really happen
                return self.state();
            }
        }
    }

    /// Fire an authentication attempt (or join the running one) and wait for its outcome.
    ///
    /// Returns whether a token is held afterwards. This is what a login screen would call.
    pub async fn authenticate(&self) -> bool {
        self.start_authentication();
        self.wait_for_authentication().await.is_authenticated()
    }

    /// The token a gated call should be delegated with
    async fn token_for_request(&self) -> Option<Token> {
        let current = self.current_token();
        if current.is_some() {
            return current;
        }

        self.start_authentication();
        match self.policy {
            AuthPolicy::Race => {
                log::debug!("Not waiting for the authentication attempt");
                self.current_token()
            },
            AuthPolicy::WaitForAuthentication => {
                log::debug!("Waiting for the authentication attempt");
                let settled = self.wait_for_authentication().await;
                settled.token().cloned()
            },
        }
    }
}

#[async_trait]
impl<S, A> TodoistService for SessionGate<S, A>
where
    S: TodoSource + Send + Sync,
    A: Authenticator + Send + Sync + 'static,
{
    async fn get_all_tasks(&self) -> NetworkResult<Vec<Task>> {
        let token = self.token_for_request().await;
        self.source.fetch_tasks(token.as_ref(), None).await
    }

    async fn get_all_labels(&self) -> NetworkResult<Vec<Label>> {
        let token = self.token_for_request().await;
        self.source.fetch_labels(token.as_ref()).await
    }

    async fn get_all_projects(&self) -> NetworkResult<Vec<Project>> {
        let token = self.token_for_request().await;
        self.source.fetch_projects(token.as_ref()).await
    }
}
