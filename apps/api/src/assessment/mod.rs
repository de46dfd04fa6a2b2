// Assessment submission: boundary validation, optional persistence and statistics.
// Scoring itself lives in `scoring`; this module never re-scores.

pub mod handlers;
pub mod stats;
pub mod store;
pub mod validation;
