//! Utility modules

pub mod fuzzy;

pub use fuzzy::{best_similarity, similarity};
