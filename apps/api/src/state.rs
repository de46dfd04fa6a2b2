use std::sync::Arc;

use crate::analysis::narrative::NarrativeGenerator;
use crate::assessment::store::AssessmentStore;
use crate::questions::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every integration is optional. `None` selects the deterministic fallback.
#[derive(Clone, Default)]
pub struct AppState {
    /// Personalized question source. Default: the fixed bank.
    pub question_generator: Option<Arc<dyn QuestionGenerator>>,
    /// Model-written feedback. Default: the calculator's result as-is.
    pub narrative_generator: Option<Arc<dyn NarrativeGenerator>>,
    /// Persistence and statistics. Default: nothing saved, zeroed stats.
    pub store: Option<Arc<dyn AssessmentStore>>,
}
