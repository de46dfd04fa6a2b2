// Score Calculator: deterministic scoring, severity bands and profile-conditioned narrative.
// Pure functions only. No I/O, no clock, no randomness.

pub mod bands;
pub mod calculator;
pub mod personalization;

pub use calculator::{calculate, AssessmentResult};
