// Rule engine: pure, deterministic functions over in-memory skill and quiz data.
// Nothing in here touches storage or the network.

pub mod advice;
pub mod jobs;
pub mod quiz;
pub mod roadmap;
pub mod taxonomy;
