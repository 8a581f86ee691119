// Scoring: role classification, skill gaps, ATS keyword overlap and the
// combined analysis. Only the classifier talks to the embedding provider.

pub mod analysis;
pub mod ats;
pub mod classifier;
pub mod handlers;
pub mod skill_gap;
