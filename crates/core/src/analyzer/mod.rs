//! Heuristic credibility analysis over static phrase lists.

mod phrases;
mod scorer;
mod types;

pub use scorer::analyze;
pub use types::{AnalysisDetails, AnalysisMode, AnalysisReport};
