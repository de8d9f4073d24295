use std::error::Error;

use async_trait::async_trait;

use crate::token::Token;
use crate::traits::Authenticator;

/// An [`Authenticator`] that always delivers the same token.
///
/// This is suited to Todoist personal API tokens, that do not need any OAuth dance.
#[derive(Clone, Debug)]
pub struct StaticTokenAuthenticator {
    token: Token,
}

impl StaticTokenAuthenticator {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self) -> Result<Token, Box<dyn Error + Send + Sync>> {
        Ok(self.token.clone())
    }
}
