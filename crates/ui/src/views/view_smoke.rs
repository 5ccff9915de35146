use std::collections::BTreeMap;

use drill_core::{Exercise, Response, TopicId};
use services::PracticeSettings;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_settings};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_groups_topics_by_category() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.settle().await;
    let html = harness.render();
    for label in ["Number sense", "Operations", "Fractions", "Geometry"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Level 1 of"), "missing level badge in {html}");
    assert!(html.contains(TopicId::LongDivision.info().title), "missing topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_configured_start_level() {
    let settings = PracticeSettings {
        start_levels: BTreeMap::from([(TopicId::Rounding, 2)]),
        ..PracticeSettings::default()
    };
    let mut harness = setup_view_harness_with_settings(ViewKind::Home, settings).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Level 2 of"), "missing raised level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_waiting_question() {
    let mut harness = setup_view_harness(ViewKind::topic(TopicId::Addition)).await;
    let problem = harness
        .services
        .practice()
        .next_question(harness.services.session_id(), TopicId::Addition)
        .await
        .expect("question");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(&problem.prompt()), "missing prompt in {html}");
    assert!(html.contains("practice-answer"), "missing answer box in {html}");
    assert!(html.contains("Check answer"), "missing submit in {html}");
    assert!(!html.contains("Recent answers"), "history before any answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_resumes_feedback() {
    let mut harness = setup_view_harness(ViewKind::topic(TopicId::Rounding)).await;
    let practice = harness.services.practice();
    let session = harness.services.session_id();
    practice
        .next_question(session, TopicId::Rounding)
        .await
        .expect("question");
    let feedback = practice
        .submit(session, TopicId::Rounding, &Response::text("-1"))
        .await
        .expect("graded");
    assert!(!feedback.assessment.correct);

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Not quite."), "missing verdict in {html}");
    assert!(html.contains("The correct answer is"), "missing answer in {html}");
    assert!(html.contains("How to solve it"), "missing explanation in {html}");
    assert!(html.contains("Next question"), "missing next button in {html}");
    assert!(!html.contains("Check answer"), "submit shown during feedback in {html}");
    assert!(html.contains("Recent answers"), "missing attempt history in {html}");
    assert!(html.contains("You: -1"), "missing given answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_choices() {
    let mut harness = setup_view_harness(ViewKind::topic(TopicId::ClassifyAngles)).await;
    harness.settle().await;
    let html = harness.render();
    for choice in ["acute", "right", "obtuse"] {
        assert!(html.contains(choice), "missing {choice} in {html}");
    }
    assert!(html.contains("<svg"), "missing angle drawing in {html}");
    assert!(html.contains("answer-choice__key"), "missing number shortcuts in {html}");
    assert!(!html.contains("Check answer"), "choices submit on click in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_step_fields() {
    let mut harness = setup_view_harness(ViewKind::topic(TopicId::LongDivision)).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("practice-field-0"), "missing fields in {html}");
    assert!(html.contains("practice-field-1"), "missing fields in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_reports_unknown_topic() {
    let mut harness = setup_view_harness(ViewKind::Topic("no-such-topic".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Unknown topic"), "missing title in {html}");
    assert!(html.contains("That topic does not exist."), "missing error in {html}");
}
