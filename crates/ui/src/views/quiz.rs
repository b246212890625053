use std::time::Duration;

use dioxus::prelude::*;
use log::warn;
use quiz_core::model::CHOICE_COUNT;

use crate::config::UiConfig;
use crate::context::AppContext;
use crate::layout::{Layout, Point, Rect};
use crate::views::ViewError;
use crate::vm::{ChoiceVm, QuizIntent, QuizOutcome, QuizScreen, QuizVm, ScoreVm};

/// How often the render loop checks whether feedback has expired.
const FEEDBACK_POLL: Duration = Duration::from_millis(100);

struct ButtonView {
    key: String,
    class: &'static str,
    style: String,
    label: String,
}

fn button_view(
    key: impl Into<String>,
    label: impl Into<String>,
    region: Rect,
    hovered: bool,
) -> ButtonView {
    ButtonView {
        key: key.into(),
        class: if hovered { "button button--hover" } else { "button" },
        style: region.css(),
        label: label.into(),
    }
}

impl From<ChoiceVm> for ButtonView {
    fn from(choice: ChoiceVm) -> Self {
        button_view(
            format!("choice-{}", choice.index),
            choice.label,
            choice.region,
            choice.hovered,
        )
    }
}

fn position_css(point: Point) -> String {
    format!("left: {}px; top: {}px;", point.x, point.y)
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.config();
    let error = use_signal(|| None::<ViewError>);
    let pointer = use_signal(|| None::<Point>);

    let vm = {
        let quiz = ctx.quiz();
        let layout = config.layout();
        let skip_start = config.skip_start;
        use_signal(move || {
            let mut vm = QuizVm::new(quiz, layout);
            if skip_start {
                if let Err(err) = vm.dispatch(QuizIntent::Start) {
                    warn!("cannot skip start screen: {}", err.message());
                }
            }
            vm
        })
    };

    use_future(move || {
        let mut vm = vm;
        async move {
            loop {
                tokio::time::sleep(FEEDBACK_POLL).await;
                if vm.peek().feedback_due() {
                    vm.write().tick();
                }
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = vm.write().dispatch(intent);
        match result {
            Ok(QuizOutcome::Continue) => error.set(None),
            Ok(QuizOutcome::Quit) => dioxus::desktop::window().close(),
            Err(err) => error.set(Some(err)),
        }
    });

    let on_click = use_callback(move |evt: MouseEvent| {
        let coords = evt.data.element_coordinates();
        let intent = vm.peek().intent_at(Point::new(coords.x, coords.y));
        if let Some(intent) = intent {
            dispatch_intent.call(intent);
        }
    });

    let on_move = use_callback(move |evt: MouseEvent| {
        let mut pointer = pointer;
        let coords = evt.data.element_coordinates();
        pointer.set(Some(Point::new(coords.x, coords.y)));
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let screen = vm.peek().screen();
        let intent = match (evt.data.key(), screen) {
            (Key::Escape, _) => Some(QuizIntent::Quit),
            (Key::Enter, QuizScreen::Start) => Some(QuizIntent::Start),
            (Key::Enter, QuizScreen::Result) => Some(QuizIntent::Restart),
            (Key::Character(value), QuizScreen::Question) => value
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=CHOICE_COUNT).contains(n))
                .map(|n| QuizIntent::SelectChoice(n - 1)),
            _ => None,
        };
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let vm_guard = vm.read();
    let pointer_at = pointer();
    let body = match vm_guard.screen() {
        QuizScreen::Start => start_screen(&config, vm_guard.layout(), pointer_at),
        QuizScreen::Question => question_screen(&vm_guard, &config, pointer_at),
        QuizScreen::Result => result_screen(vm_guard.score(), vm_guard.layout(), pointer_at),
    };
    let error_message = error().map(|err| err.message());
    let font_css = config.font_face_css();
    let stage_css = config.stage_css();

    rsx! {
        style { "{font_css}" }
        div {
            class: "stage",
            id: "quiz-stage",
            tabindex: "0",
            style: "{stage_css}",
            onmounted: move |evt| async move {
                let _ = evt.data().set_focus(true).await;
            },
            onclick: on_click,
            onmousemove: on_move,
            onmouseleave: move |_| {
                let mut pointer = pointer;
                pointer.set(None);
            },
            onkeydown: on_key,
            {body}
            if let Some(message) = error_message {
                p { class: "view-error", "{message}" }
            }
        }
    }
}

fn start_screen(config: &UiConfig, layout: &Layout, pointer: Option<Point>) -> Element {
    let region = layout.start_button();
    let start = button_view(
        "start",
        "Start",
        region,
        pointer.is_some_and(|p| region.contains(p)),
    );
    let title_style = position_css(layout.title_origin());

    rsx! {
        p { class: "title", style: "{title_style}", "{config.start_title}" }
        div { key: "{start.key}", class: start.class, style: "{start.style}", "{start.label}" }
    }
}

fn question_screen(vm: &QuizVm, config: &UiConfig, pointer: Option<Point>) -> Element {
    let layout = vm.layout();
    let image_src = vm.image().map(|image| config.image_src(image));
    let image_style = position_css(layout.image_center());
    let buttons: Vec<ButtonView> = vm.choices(pointer).into_iter().map(ButtonView::from).collect();
    let feedback = vm.feedback_text();
    let feedback_style = position_css(layout.feedback_center());
    let progress = vm.progress_label();
    let progress_style = position_css(layout.progress_origin());

    rsx! {
        if let Some(src) = image_src {
            img { class: "prompt-image", src: "{src}", alt: "", style: "{image_style}" }
        }
        for button in buttons {
            div { key: "{button.key}", class: button.class, style: "{button.style}", "{button.label}" }
        }
        if let Some(message) = feedback {
            p { class: "feedback", style: "{feedback_style}", "{message}" }
        }
        if let Some(progress) = progress {
            p { class: "progress", style: "{progress_style}", "{progress}" }
        }
    }
}

fn result_screen(score: Option<ScoreVm>, layout: &Layout, pointer: Option<Point>) -> Element {
    let region = layout.retry_button();
    let retry = button_view(
        "retry",
        "Retry",
        region,
        pointer.is_some_and(|p| region.contains(p)),
    );
    let score_style = position_css(layout.score_origin());
    let percentage_style = position_css(layout.percentage_origin());
    let elapsed_style = position_css(layout.progress_origin());

    rsx! {
        if let Some(score) = score {
            p { class: "score-line", style: "{score_style}", "{score.fraction_label}" }
            p { class: "score-line", style: "{percentage_style}", "{score.percentage_label}" }
            if let Some(elapsed) = score.elapsed_label {
                p { class: "progress", style: "{elapsed_style}", "{elapsed}" }
            }
        }
        div { key: "{retry.key}", class: retry.class, style: "{retry.style}", "{retry.label}" }
    }
}
