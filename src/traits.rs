use std::error::Error;

use async_trait::async_trait;

use crate::error::NetworkResult;
use crate::filter::TaskFilter;
use crate::token::Token;
use crate::{Label, Project, Task};

/// A source of Todoist data, that must be given a token for every request
#[async_trait]
pub trait TodoSource {
    /// Returns every project of the account.
    /// `token` is `None` when the caller has not been able to get one yet. Implementors must fail in this case.
    async fn fetch_projects(&self, token: Option<&Token>) -> NetworkResult<Vec<Project>>;
    /// Returns every label of the account.
    /// See [`Self::fetch_projects`] about `token`
    async fn fetch_labels(&self, token: Option<&Token>) -> NetworkResult<Vec<Label>>;
    /// Returns the active tasks of the account.
    /// `filter` is not applied for now, it is here for interface stability.
    /// See [`Self::fetch_projects`] about `token`
    async fn fetch_tasks(&self, token: Option<&Token>, filter: Option<&TaskFilter>) -> NetworkResult<Vec<Task>>;
}

/// An authentication flow (e.g. OAuth) that can deliver a bearer token
#[async_trait]
pub trait Authenticator {
    /// Run the flow. This may take a while, e.g. when the user has to log in
    async fn authenticate(&self) -> Result<Token, Box<dyn Error + Send + Sync>>;
}

/// Todoist data, available without having to care about credentials
#[async_trait]
pub trait TodoistService {
    async fn get_all_tasks(&self) -> NetworkResult<Vec<Task>>;
    async fn get_all_labels(&self) -> NetworkResult<Vec<Label>>;
    async fn get_all_projects(&self) -> NetworkResult<Vec<Project>>;
}

#[async_trait]
impl<T> TodoistService for std::sync::Arc<T>
where
    T: TodoistService + Send + Sync + ?Sized,
{
    async fn get_all_tasks(&self) -> NetworkResult<Vec<Task>> {
        (**self).get_all_tasks().await
    }

    async fn get_all_labels(&self) -> NetworkResult<Vec<Label>> {
        (**self).get_all_labels().await
    }

    async fn get_all_projects(&self) -> NetworkResult<Vec<Project>> {
        (**self).get_all_projects().await
    }
}
