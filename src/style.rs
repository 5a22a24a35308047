//! Psycholinguistic style analysis
//!
//! Counts linguistic features in a text and ranks the psychological
//! correlates those counts point to.

mod correlates;
mod features;

pub use correlates::rank;
pub use features::{FeatureCounter, FeatureVector};
