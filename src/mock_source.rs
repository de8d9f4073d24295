//! In-memory test doubles for [`TodoSource`] and [`Authenticator`]
#![cfg(any(test, feature = "mock_sources"))]

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::TodoistApi;
use crate::error::{NetworkError, NetworkResult};
use crate::filter::TaskFilter;
use crate::mock_behaviour::MockBehaviour;
use crate::token::Token;
use crate::traits::{Authenticator, TodoSource};
use crate::{Label, Project, Task};

/// A request that reached a [`MockSource`]
#[derive(Clone, Debug, PartialEq)]
pub struct MockRequest {
    pub api: TodoistApi,
    pub token: Option<Token>,
}

/// A [`TodoSource`] that serves fixed lists, and records every request it gets
///
/// Just like a real server, it fails requests that come without a token.
#[derive(Debug, Default)]
pub struct MockSource {
    projects: Vec<Project>,
    labels: Vec<Label>,
    tasks: Vec<Task>,

    requests: Mutex<Vec<MockRequest>>,
    mock_behaviour: Mutex<MockBehaviour>,
}

impl MockSource {
    pub fn new(projects: Vec<Project>, labels: Vec<Label>, tasks: Vec<Task>) -> Self {
        Self { projects, labels, tasks, ..Self::default() }
    }

    pub fn with_behaviour(mut self, behaviour: MockBehaviour) -> Self {
        self.mock_behaviour = Mutex::new(behaviour);
        self
    }

    /// The requests received so far, oldest first
    pub fn requests(&self) -> Vec<MockRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn serve<T: Clone>(&self, api: TodoistApi, token: Option<&Token>, items: &[T]) -> NetworkResult<Vec<T>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(MockRequest{ api, token: token.cloned() });
        }

        if token.is_none() {
            log::warn!("Mock source: refusing to list {} without a token", api);
            return Err(NetworkError);
        }

        let allowed = match self.mock_behaviour.lock() {
            Err(_) => Err("Mock behaviour is poisoned".into()),
            Ok(mut behaviour) => match api {
                TodoistApi::Projects => behaviour.can_fetch_projects(),
                TodoistApi::Labels => behaviour.can_fetch_labels(),
                TodoistApi::Tasks => behaviour.can_fetch_tasks(),
            },
        };
        if let Err(err) = allowed {
            log::warn!("Mock source: unable to list {}: {}", api, err);
            return Err(NetworkError);
        }

        Ok(items.to_vec())
    }
}

#[async_trait]
impl TodoSource for MockSource {
    async fn fetch_projects(&self, token: Option<&Token>) -> NetworkResult<Vec<Project>> {
        self.serve(TodoistApi::Projects, token, &self.projects)
    }

    async fn fetch_labels(&self, token: Option<&Token>) -> NetworkResult<Vec<Label>> {
        self.serve(TodoistApi::Labels, token, &self.labels)
    }

    async fn fetch_tasks(&self, token: Option<&Token>, _filter: Option<&TaskFilter>) -> NetworkResult<Vec<Task>> {
        self.serve(TodoistApi::Tasks, token, &self.tasks)
    }
}


/// An [`Authenticator`] that counts its attempts, and that can be held until a test releases it
#[derive(Debug)]
pub struct MockAuthenticator {
    token: Token,
    attempts: AtomicUsize,
    release: Option<Arc<Notify>>,
    mock_behaviour: Mutex<MockBehaviour>,
}

impl MockAuthenticator {
    /// An authenticator that immediately delivers `token`
    pub fn new(token: Token) -> Self {
        Self {
            token,
            attempts: AtomicUsize::new(0),
            release: None,
            mock_behaviour: Mutex::new(MockBehaviour::new()),
        }
    }

    /// An authenticator whose attempts only resolve once the returned `Notify` is notified (once per attempt)
    pub fn held(token: Token) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let mut auth = Self::new(token);
        auth.release = Some(Arc::clone(&release));
        (auth, release)
    }

    pub fn with_behaviour(mut self, behaviour: MockBehaviour) -> Self {
        self.mock_behaviour = Mutex::new(behaviour);
        self
    }

    /// How many times `authenticate` has been called
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self) -> Result<Token, Box<dyn Error + Send + Sync>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(release) = &self.release {
            release.notified().await;
        }

        let allowed = match self.mock_behaviour.lock() {
            Err(_) => false,
            Ok(mut behaviour) => behaviour.can_authenticate().is_ok(),
        };
        if allowed == false {
            return Err("Mocked behaviour requires this authentication to fail".into());
        }
        Ok(self.token.clone())
    }
}
