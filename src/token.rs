//! OAuth bearer tokens

use std::error::Error;
use std::fmt::{Debug, Formatter};

/// An opaque bearer credential, as delivered by an [`Authenticator`](crate::traits::Authenticator)
///
/// A token is never empty. Its `Debug` output does not reveal its content, so that it does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    content: String,
}

impl Token {
    /// Wrap a credential. Fails if it is empty.
    pub fn new<S: ToString>(content: S) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let content = content.to_string();
        if content.is_empty() {
            return Err("A bearer token cannot be empty".into());
        }
        Ok(Self { content })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(<{} chars>)", self.content.chars().count())
    }
}
