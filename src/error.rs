//! The error returned by every network operation

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A network operation failed.
///
/// Transport failures, unexpected HTTP statuses, undecodable bodies and missing tokens all collapse into this single error.
/// Its cause is logged (see the `log` crate) but not carried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkError;

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "network request failed")
    }
}

impl Error for NetworkError {}

/// The outcome of a network operation
pub type NetworkResult<T> = Result<T, NetworkError>;
