use std::path::PathBuf;

use crate::config::UiConfig;

use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen() {
    let mut harness = setup_view_harness(UiConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Hebrew Grammar Quiz"), "missing title in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(!html.contains("bayit"), "choices shown before start in {html}");
    assert!(html.contains("QuizFont"), "missing font face in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_skip_start_renders_first_question() {
    let config = UiConfig {
        skip_start: true,
        image_root: PathBuf::from("/data/quiz"),
        ..UiConfig::default()
    };
    let mut harness = setup_view_harness(config);
    harness.rebuild();
    let html = harness.render();

    for label in ["bayit", "sefer", "ish", "yom"] {
        assert!(html.contains(label), "missing choice {label} in {html}");
    }
    assert!(html.contains("/data/quiz/images/house.png"), "missing image in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(!html.contains("Wrong answer"), "unexpected feedback in {html}");
    assert!(!html.contains("Hebrew Grammar Quiz"), "start screen still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_positions_choices_from_layout() {
    let config = UiConfig {
        skip_start: true,
        ..UiConfig::default()
    };
    let mut harness = setup_view_harness(config);
    harness.rebuild();
    let html = harness.render();

    for (x, y) in [(100, 420), (400, 420), (100, 500), (400, 500)] {
        let css = format!("left: {x}px; top: {y}px; width: 300px; height: 50px;");
        assert!(html.contains(&css), "missing choice region {css} in {html}");
    }
    assert_eq!(harness.quiz.total_questions(), 2);
}
