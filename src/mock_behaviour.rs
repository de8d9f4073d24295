//! This module provides ways to tweak mocked sources and authenticators, so that they can return errors on some tests
#![cfg(any(test, feature = "mock_sources"))]

use std::error::Error;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    // From the TodoSource trait
    pub fetch_projects_behaviour: (u32, u32),
    pub fetch_labels_behaviour: (u32, u32),
    pub fetch_tasks_behaviour: (u32, u32),

    // From the Authenticator trait
    pub authenticate_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            fetch_projects_behaviour: (0, n_fails),
            fetch_labels_behaviour: (0, n_fails),
            fetch_tasks_behaviour: (0, n_fails),
            authenticate_behaviour: (0, n_fails),
        }
    }

    pub fn can_fetch_projects(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.fetch_projects_behaviour, "fetch_projects")
    }
    pub fn can_fetch_labels(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.fetch_labels_behaviour, "fetch_labels")
    }
    pub fn can_fetch_tasks(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.fetch_tasks_behaviour, "fetch_tasks")
    }
    pub fn can_authenticate(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.authenticate_behaviour, "authenticate")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}
