//! This module provides a client to connect to the Todoist REST API

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{parse_base_url, TodoistApi};
use crate::error::{NetworkError, NetworkResult};
use crate::filter::TaskFilter;
use crate::token::Token;
use crate::traits::TodoSource;
use crate::{Label, Project, Task};


/// A [`TodoSource`] that fetches its data from a Todoist-compatible REST server
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, Box<dyn Error>> {
        let base_url = parse_base_url(base_url)?;

        Ok(Self{
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the official Todoist server
    pub fn todoist() -> Result<Self, Box<dyn Error>> {
        Self::new(crate::config::DEFAULT_API_BASE_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn sub_request(&self, api: TodoistApi, token: &Token) -> Result<String, Box<dyn Error>> {
        let url = api.url(&self.base_url)?;
        log::debug!("GET {}", url);

        let res = self.http
            .get(url)
            .bearer_auth(token.as_str())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, crate::config::user_agent())
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", res.status()).into());
        }

        let text = res.text().await?;
        Ok(text)
    }

    async fn sub_request_and_parse<T: DeserializeOwned>(&self, api: TodoistApi, token: &Token) -> Result<Vec<T>, Box<dyn Error>> {
        let text = self.sub_request(api, token).await?;
        let items: Vec<T> = serde_json::from_str(&text)
            .map_err(|err| format!("Invalid {} payload: {}", api, err))?;
        Ok(items)
    }

    /// Lists a resource. Every failure is logged, then reported as a [`NetworkError`]
    async fn list<T: DeserializeOwned>(&self, api: TodoistApi, token: Option<&Token>) -> NetworkResult<Vec<T>> {
        let token = match token {
            None => {
                log::warn!("Cannot list {} without a token", api);
                return Err(NetworkError);
            },
            Some(token) => token,
        };

        match self.sub_request_and_parse(api, token).await {
            Err(err) => {
                log::warn!("Unable to list {}: {}", api, err);
                Err(NetworkError)
            },
            Ok(items) => {
                log::debug!("Got {} {}", items.len(), api);
                Ok(items)
            },
        }
    }
}

#[async_trait]
impl TodoSource for Client {
    async fn fetch_projects(&self, token: Option<&Token>) -> NetworkResult<Vec<Project>> {
        self.list(TodoistApi::Projects, token).await
    }

    async fn fetch_labels(&self, token: Option<&Token>) -> NetworkResult<Vec<Label>> {
        self.list(TodoistApi::Labels, token).await
    }

    async fn fetch_tasks(&self, token: Option<&Token>, filter: Option<&TaskFilter>) -> NetworkResult<Vec<Task>> {
        if let Some(filter) = filter {
            if filter.is_empty() == false {
                log::debug!("Task filters are not supported yet, ignoring {:?}", filter);
            }
        }
        self.list(TodoistApi::Tasks, token).await
    }
}
