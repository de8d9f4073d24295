//! The resources exposed by the remote API

use std::error::Error;
use std::fmt::{Display, Formatter};

use url::Url;

/// A REST resource, that is listed with a `GET <base-url>/<path>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TodoistApi {
    Projects,
    Labels,
    Tasks,
}

impl TodoistApi {
    pub fn path(&self) -> &'static str {
        match self {
            TodoistApi::Projects => "projects",
            TodoistApi::Labels => "labels",
            TodoistApi::Tasks => "tasks",
        }
    }

    /// Build the URL of this resource by keeping the scheme, server and path prefix from `base`
    pub fn url(&self, base: &Url) -> Result<Url, Box<dyn Error>> {
        Ok(base.join(self.path())?)
    }
}

impl Display for TodoistApi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Parse a base URL, making sure resource paths will be appended to it rather than replace its last segment
pub fn parse_base_url<S: AsRef<str>>(base: S) -> Result<Url, Box<dyn Error>> {
    let mut url = Url::parse(base.as_ref())?;
    if url.cannot_be_a_base() {
        return Err(format!("{} cannot be used as a base URL", url).into());
    }
    if url.path().ends_with('/') == false {
        let new_path = format!("{}/", url.path());
        url.set_path(&new_path);
    }
    Ok(url)
}
