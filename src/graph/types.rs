//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use super::store::{GraphError, GraphResult};

/// Bound alias for node identifiers.
///
/// The store is generic over any hashable, totally ordered identifier.
/// The ordering is what makes ranking tie-breaks and component numbering
/// deterministic. Plain integers qualify, as does [`UserId`].
pub trait SocialId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> SocialId for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Unique identifier for a user account in the social graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        UserId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a user-typed identifier, e.g. free-text search input.
    ///
    /// Non-integer text is rejected with a typed error so the
    /// presentation layer can surface it to the user.
    pub fn parse(input: &str) -> GraphResult<Self> {
        input.trim().parse::<u64>().map(UserId).map_err(|_| {
            GraphError::InvalidArgument(format!("node id must be an integer, got {:?}", input))
        })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}
