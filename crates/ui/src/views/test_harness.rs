use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::Question;
use quiz_core::time::fixed_clock;
use services::QuizService;
use storage::InMemoryQuestionSource;

use crate::config::UiConfig;
use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

struct TestApp {
    quiz: Arc<QuizService>,
    config: UiConfig,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn ui_config(&self) -> UiConfig {
        self.config.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz: Arc<QuizService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two questions: `bayit` with image `images/house.png`, then `sefer`.
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::parse("images/house.png", "bayit", ["sefer", "ish", "yom"]).expect("question"),
        Question::parse("images/book.png", "sefer", ["bayit", "melech", "layla"])
            .expect("question"),
    ]
}

pub fn setup_view_harness(config: UiConfig) -> ViewHarness {
    let source = InMemoryQuestionSource::new(sample_questions());
    let quiz = Arc::new(QuizService::from_source(&source, fixed_clock()).expect("quiz service"));
    let app = Arc::new(TestApp {
        quiz: Arc::clone(&quiz),
        config,
    });
    let dom = VirtualDom::new_with_props(QuizHarness, ViewHarnessProps { app });
    ViewHarness { dom, quiz }
}
