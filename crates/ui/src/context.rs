use std::sync::Arc;

use services::ExamService;

/// UI-facing application surface provided by the composition root.
pub trait UiApp: Send + Sync {
    /// Display name for the student, or a placeholder when none was given.
    fn student_name(&self) -> String;

    fn exam_service(&self) -> Arc<ExamService>;
}

#[derive(Clone)]
pub struct AppContext {
    student_name: String,
    exam_service: Arc<ExamService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            student_name: app.student_name(),
            exam_service: app.exam_service(),
        }
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    #[must_use]
    pub fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
