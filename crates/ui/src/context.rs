use std::sync::Arc;

use services::QuizService;

use crate::config::UiConfig;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn ui_config(&self) -> UiConfig;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    config: Arc<UiConfig>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            config: Arc::new(app.ui_config()),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn config(&self) -> Arc<UiConfig> {
        Arc::clone(&self.config)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
