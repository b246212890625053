use std::sync::Arc;

use log::{debug, warn};
use quiz_core::model::ImageRef;
use services::{QuizService, QuizSession, SessionError};

use crate::layout::{Layout, Point, Rect};
use crate::views::ViewError;
use crate::vm::score_vm::{ScoreVm, map_score};

/// Every action the quiz screen understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    SelectChoice(usize),
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Question,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub region: Rect,
    pub hovered: bool,
}

/// Screen-level state around a `QuizSession`.
///
/// Before Start there is no session; afterwards the session decides whether the
/// question or the result screen is shown.
pub struct QuizVm {
    quiz: Arc<QuizService>,
    layout: Layout,
    session: Option<QuizSession>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: Arc<QuizService>, layout: Layout) -> Self {
        Self {
            quiz,
            layout,
            session: None,
        }
    }

    /// Build a view-model that is already on the first question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` when there are no questions.
    pub fn started(quiz: Arc<QuizService>, layout: Layout) -> Result<Self, ViewError> {
        let mut vm = Self::new(quiz, layout);
        vm.dispatch(QuizIntent::Start)?;
        Ok(vm)
    }

    /// Wrap an existing session, e.g. one started with a seeded RNG.
    #[must_use]
    pub fn with_session(quiz: Arc<QuizService>, layout: Layout, session: QuizSession) -> Self {
        Self {
            quiz,
            layout,
            session: Some(session),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match &self.session {
            None => QuizScreen::Start,
            Some(session) if session.is_complete() => QuizScreen::Result,
            Some(_) => QuizScreen::Question,
        }
    }

    /// Apply one intent.
    ///
    /// Intents that do not apply to the current screen are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` if a session cannot be started.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        debug!("dispatch {intent:?} on {:?}", self.screen());
        match intent {
            QuizIntent::Start => {
                if self.session.is_none() {
                    self.session = Some(self.quiz.start_session().map_err(|err| {
                        warn!("cannot start quiz: {err}");
                        match err {
                            SessionError::EmptyBank => ViewError::EmptyQuiz,
                            _ => ViewError::Unknown,
                        }
                    })?);
                }
            }
            QuizIntent::SelectChoice(index) => {
                if let Some(session) = self.session.as_mut() {
                    session.select_choice(index);
                }
            }
            QuizIntent::Restart => {
                if let Some(session) = self.session.as_mut() {
                    session.restart();
                }
            }
            QuizIntent::Quit => return Ok(QuizOutcome::Quit),
        }
        Ok(QuizOutcome::Continue)
    }

    /// Map a click position to the intent of the button under it.
    #[must_use]
    pub fn intent_at(&self, point: Point) -> Option<QuizIntent> {
        match self.screen() {
            QuizScreen::Start => self
                .layout
                .start_button()
                .contains(point)
                .then_some(QuizIntent::Start),
            QuizScreen::Question => {
                let count = self.session.as_ref().map_or(0, |s| s.choices().len());
                self.layout
                    .hit_test(point, count)
                    .map(QuizIntent::SelectChoice)
            }
            QuizScreen::Result => self
                .layout
                .retry_button()
                .contains(point)
                .then_some(QuizIntent::Restart),
        }
    }

    /// Displayed choices with their regions; `pointer` drives the hover highlight.
    #[must_use]
    pub fn choices(&self, pointer: Option<Point>) -> Vec<ChoiceVm> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        session
            .choices()
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                let region = self.layout.choice_region(index)?;
                Some(ChoiceVm {
                    index,
                    label: label.to_owned(),
                    region,
                    hovered: pointer.is_some_and(|p| region.contains(p)),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.session
            .as_ref()
            .and_then(QuizSession::current_question)
            .map(|q| q.image())
    }

    #[must_use]
    pub fn feedback_text(&self) -> Option<&'static str> {
        self.session
            .as_ref()
            .and_then(QuizSession::feedback)
            .map(|f| f.message())
    }

    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .filter(|s| !s.is_complete())
            .map(|s| s.progress().position_label())
    }

    #[must_use]
    pub fn score(&self) -> Option<ScoreVm> {
        self.session.as_ref().and_then(map_score)
    }

    /// True when a `tick()` now would clear the feedback message.
    #[must_use]
    pub fn feedback_due(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(QuizSession::is_feedback_expired)
    }

    /// Expire feedback. Called from the render loop's polling task.
    pub fn tick(&mut self) -> bool {
        self.session.as_mut().is_some_and(QuizSession::tick)
    }
}
