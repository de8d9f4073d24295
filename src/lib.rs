//! This crate provides a client for the Todoist REST API, and the logic of a task dashboard built on top of it.
//!
//! The [`client`] module provides a [`Client`](client::Client) that lists projects, labels and tasks, provided it is given a bearer token.
//!
//! Getting this token is the job of an [`Authenticator`](traits::Authenticator) (e.g. an OAuth flow, that is not part of this crate). \
//! A [`SessionGate`](session::SessionGate) holds the token of a session. It fires an authentication attempt on the first API call, and forwards the calls to the client.
//!
//! The [`dashboard`] module provides the presenter and interactor of a calendar screen, that a GUI can plug its view and router into (see the [`viper`] contracts).

pub mod traits;
pub mod config;
pub mod api;
pub mod error;
pub use error::{NetworkError, NetworkResult};
mod token;
pub use token::Token;
mod project;
pub use project::Project;
mod label;
pub use label::Label;
pub mod task;
pub use task::Task;
pub mod filter;

pub mod client;
pub mod session;
pub use session::SessionGate;

pub mod viper;
pub mod dashboard;

pub mod utils;

pub mod mock_behaviour;
pub mod mock_source;
