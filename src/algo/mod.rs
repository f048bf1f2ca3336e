//! Graph algorithms module
//!
//! Algorithms take a read-only [`SocialGraph`](crate::graph::SocialGraph)
//! and return plain data. None of them hold state between calls, so the
//! same call against the same graph always produces the same result.

pub mod components;
pub mod recommend;

// Re-export algorithms
pub use components::{connected_components, ComponentSet};
pub use recommend::{recommend_friends, Recommendation};
