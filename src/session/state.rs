//! The authentication state of a session, and a way to watch it

use std::fmt::{Display, Error, Formatter};

use crate::token::Token;

/// Where a [`SessionGate`](super::SessionGate) stands
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// No token is held, and no attempt to get one is running
    Unauthenticated,
    /// An authentication attempt is running
    Authenticating,
    /// A token is held. There is no way back from this state
    Authenticated(Token),
}

impl SessionState {
    pub fn token(&self) -> Option<&Token> {
        match self {
            SessionState::Authenticated(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Whether no authentication attempt is running
    pub fn is_settled(&self) -> bool {
        match self {
            SessionState::Authenticating => false,
            _ => true,
        }
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            SessionState::Unauthenticated => write!(f, "Unauthenticated"),
            SessionState::Authenticating => write!(f, "Authenticating..."),
            SessionState::Authenticated(_) => write!(f, "Authenticated"),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Unauthenticated
    }
}



/// See [`state_channel`]
pub type StateSender = tokio::sync::watch::Sender<SessionState>;
/// See [`state_channel`]
pub type StateReceiver = tokio::sync::watch::Receiver<SessionState>;

/// Create a state channel. Its sender holds the state of a session, its receivers can be used to follow it
pub fn state_channel() -> (StateSender, StateReceiver) {
    tokio::sync::watch::channel(SessionState::default())
}
