//! Game rules for Bridge-it.
//!
//! Pure functions over an [`EdgeGrid`](super::EdgeGrid); the engine calls
//! them after each placement.

pub mod connectivity;

pub use connectivity::{find_winning_path, has_winning_path};
