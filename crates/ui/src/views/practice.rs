use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use drill_core::{InputKind, Response, TopicId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::visuals::VisualView;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnswerDraft, AttemptRowVm, FeedbackVm, PracticeVm, start_practice};

#[derive(Clone, Debug, PartialEq, Eq)]
enum PracticeIntent {
    Submit,
    Choose(String),
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum KeyAction {
    Dispatch(PracticeIntent),
    Home,
}

/// Keyboard shortcuts. Enter checks the answer or moves on after feedback,
/// `N` moves on, Escape leaves, and digits pick a numbered choice.
fn key_action(key: &Key, reviewing: bool, input: Option<&InputKind>) -> Option<KeyAction> {
    match key {
        Key::Escape => Some(KeyAction::Home),
        Key::Enter if reviewing => Some(KeyAction::Dispatch(PracticeIntent::Next)),
        // Choices are answered by clicking or by number; there is nothing to submit.
        Key::Enter => match input {
            Some(InputKind::Choice(_)) | None => None,
            Some(_) => Some(KeyAction::Dispatch(PracticeIntent::Submit)),
        },
        Key::Character(value) if reviewing => value
            .eq_ignore_ascii_case("n")
            .then_some(KeyAction::Dispatch(PracticeIntent::Next)),
        Key::Character(value) => {
            let Some(InputKind::Choice(options)) = input else {
                return None;
            };
            let index = value.parse::<usize>().ok()?.checked_sub(1)?;
            options
                .get(index)
                .map(|option| KeyAction::Dispatch(PracticeIntent::Choose(option.clone())))
        }
        _ => None,
    }
}

fn focus_target(vm: Option<&PracticeVm>) -> &'static str {
    match vm {
        Some(vm) if vm.is_reviewing() => "practice-next",
        Some(vm) => match vm.question().input {
            InputKind::Number | InputKind::Decimal | InputKind::Fraction => "practice-answer",
            InputKind::Fields(_) => "practice-field-0",
            InputKind::Choice(_) | InputKind::Order(_) => "practice-root",
        },
        None => "practice-root",
    }
}

/// Practice page for one topic. Keyed by slug so switching topics starts fresh.
#[component]
pub fn TopicView(slug: String) -> Element {
    rsx! {
        PracticePage { key: "{slug}", slug: slug.clone() }
    }
}

#[component]
fn PracticePage(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();
    let session = ctx.session_id();
    let title = TopicId::from_slug(&slug).map_or("Unknown topic", |topic| topic.info().title);

    let mut vm = use_signal(|| None::<PracticeVm>);
    let mut draft = use_signal(AnswerDraft::default);
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    let mut resource = {
        let practice = practice.clone();
        use_resource(move || {
            let practice = practice.clone();
            let slug = slug.clone();
            async move {
                let loaded = start_practice(&practice, session, &slug).await?;
                vm.set(Some(loaded));
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(&resource);

    use_effect(move || {
        let target = focus_target(vm.read().as_ref());
        let _ = eval(&format!("document.getElementById({target:?})?.focus();"));
    });

    let dispatch = use_callback(move |intent: PracticeIntent| {
        if busy() {
            return;
        }
        let Some(mut current) = vm.read().clone() else {
            return;
        };
        let response = match &intent {
            PracticeIntent::Submit => Some(draft.read().response(&current.question().input)),
            PracticeIntent::Choose(option) => Some(Response::text(option.clone())),
            PracticeIntent::Next => None,
        };
        let practice = practice.clone();
        spawn(async move {
            busy.set(true);
            let result = match &response {
                Some(response) => current.submit(&practice, response).await,
                None => current.next(&practice).await,
            };
            if result.is_ok() && response.is_none() {
                draft.set(AnswerDraft::default());
            }
            vm.set(Some(current));
            error.set(result.err());
            busy.set(false);
        });
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let action = {
            let guard = vm.read();
            let current = guard.as_ref();
            key_action(
                &evt.data.key(),
                current.is_some_and(PracticeVm::is_reviewing),
                current.map(|page| &page.question().input),
            )
        };
        let Some(action) = action else {
            return;
        };
        evt.prevent_default();
        match action {
            KeyAction::Dispatch(intent) => dispatch.call(intent),
            KeyAction::Home => {
                navigator.push(Route::Home {});
            }
        }
    });

    let vm_guard = vm.read();
    let current = vm_guard.as_ref();
    let level_label = current.map(PracticeVm::level_label);
    let score_label = current.map(PracticeVm::score_label);
    let streak_label = current.map(PracticeVm::streak_label);

    rsx! {
        div { class: "page practice-page", id: "practice-root", tabindex: "0", onkeydown: on_key,
            header { class: "practice-header",
                Link { class: "practice-back", to: Route::Home {}, "All topics" }
                h2 { class: "practice-title", "{title}" }
                if let Some(label) = level_label {
                    span { class: "level-badge", "{label}" }
                }
                if let Some(label) = score_label {
                    span { class: "practice-stat", "{label}" }
                }
                if let Some(label) = streak_label {
                    span { class: "practice-stat", "{label}" }
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "practice-error", "{err.message()}" }
                    if err == ViewError::UnknownTopic {
                        Link { class: "btn btn-secondary", to: Route::Home {}, "Choose a topic" }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(current) = current {
                        section { class: "practice-question",
                            p { class: "practice-prompt", "{current.question().prompt}" }
                            VisualView { visual: current.question().visual.clone() }
                        }
                        if let Some(feedback) = current.feedback() {
                            FeedbackPanel { feedback: feedback.clone() }
                            button {
                                class: "btn btn-primary",
                                id: "practice-next",
                                r#type: "button",
                                onclick: move |_| dispatch.call(PracticeIntent::Next),
                                "Next question"
                            }
                        } else {
                            AnswerInput {
                                input: current.question().input.clone(),
                                draft,
                                on_choose: move |option| dispatch.call(PracticeIntent::Choose(option)),
                            }
                            if let Some(message) = current.input_error() {
                                p { class: "input-error", role: "alert", "{message}" }
                            }
                            if !matches!(current.question().input, InputKind::Choice(_)) {
                                button {
                                    class: "btn btn-primary",
                                    id: "practice-submit",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(PracticeIntent::Submit),
                                    "Check answer"
                                }
                            }
                        }
                    }
                    if let Some(err) = *error.read() {
                        p { class: "practice-error", "{err.message()}" }
                    }
                    if let Some(current) = current {
                        RecentAttempts { rows: current.recent_attempts().to_vec() }
                    }
                },
            }
        }
    }
}

#[component]
fn AnswerInput(
    input: InputKind,
    mut draft: Signal<AnswerDraft>,
    on_choose: EventHandler<String>,
) -> Element {
    let placeholder = input.placeholder();
    let text = draft.read().text.clone();

    match input {
        InputKind::Number | InputKind::Decimal | InputKind::Fraction => rsx! {
            input {
                class: "answer-input",
                id: "practice-answer",
                r#type: "text",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt| draft.write().text = evt.value(),
            }
        },
        InputKind::Choice(options) => rsx! {
            div { class: "answer-choices",
                for (index, option) in options.into_iter().enumerate() {
                    ChoiceButton { key: "{option}", shortcut: index + 1, label: option.clone(), on_choose }
                }
            }
        },
        InputKind::Order(labels) => {
            let chosen = draft
                .read()
                .order
                .iter()
                .filter_map(|&index| labels.get(index).cloned())
                .collect::<Vec<_>>()
                .join(", ");
            rsx! {
                div { class: "answer-tiles",
                    for (index, label) in labels.into_iter().enumerate() {
                        OrderTile { key: "{index}", index, label, draft }
                    }
                }
                p { class: "answer-order", "Your order: {chosen}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| draft.write().order.clear(),
                    "Clear"
                }
            }
        }
        InputKind::Fields(labels) => rsx! {
            div { class: "answer-fields",
                for (index, label) in labels.into_iter().enumerate() {
                    FieldInput { key: "{index}", index, label, draft }
                }
            }
        },
    }
}

#[component]
fn ChoiceButton(shortcut: usize, label: String, on_choose: EventHandler<String>) -> Element {
    let value = label.clone();
    rsx! {
        button {
            class: "answer-choice",
            r#type: "button",
            onclick: move |_| on_choose.call(value.clone()),
            span { class: "answer-choice__key", "{shortcut}" }
            "{label}"
        }
    }
}

#[component]
fn OrderTile(index: usize, label: String, mut draft: Signal<AnswerDraft>) -> Element {
    let position = draft.read().placed_position(index).map(|placed| placed + 1);
    let class = if position.is_some() {
        "answer-tile answer-tile--placed"
    } else {
        "answer-tile"
    };

    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |_| draft.write().toggle_tile(index),
            if let Some(position) = position {
                span { class: "answer-tile__position", "{position}" }
            }
            "{label}"
        }
    }
}

#[component]
fn FieldInput(index: usize, label: String, mut draft: Signal<AnswerDraft>) -> Element {
    let id = format!("practice-field-{index}");
    let value = draft.read().fields.get(index).cloned().unwrap_or_default();

    rsx! {
        label { class: "answer-field", r#for: "{id}",
            span { class: "answer-field__label", "{label}" }
            input {
                id: "{id}",
                r#type: "text",
                autocomplete: "off",
                value: "{value}",
                oninput: move |evt| draft.write().set_field(index, evt.value()),
            }
        }
    }
}

fn step_class(correct: bool) -> &'static str {
    if correct { "step step--ok" } else { "step step--wrong" }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let class = if feedback.correct {
        "feedback feedback--correct"
    } else {
        "feedback feedback--incorrect"
    };

    rsx! {
        div { class, role: "status",
            h3 { class: "feedback__headline", "{feedback.headline}" }
            if let Some(label) = feedback.answer_label {
                p { class: "feedback__answer", "{label}" }
            }
            if let Some(note) = feedback.note {
                p { class: "feedback__note", "{note}" }
            }
            if !feedback.steps.is_empty() {
                table { class: "feedback__steps",
                    thead {
                        tr {
                            th { "Step" }
                            th { "Your answer" }
                            th { "Correct" }
                        }
                    }
                    tbody {
                        for (index, step) in feedback.steps.into_iter().enumerate() {
                            tr {
                                key: "{index}",
                                class: step_class(step.correct),
                                td { "{step.label}" }
                                td { "{step.given}" }
                                td { "{step.expected}" }
                            }
                        }
                    }
                }
            }
            if let Some(change) = feedback.level_change {
                p { class: "feedback__level", "{change}" }
            }
            div { class: "explanation",
                h4 { "How to solve it" }
                ol {
                    for (index, line) in feedback.explanation.into_iter().enumerate() {
                        li { key: "{index}", "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentAttempts(rows: Vec<AttemptRowVm>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "recent-attempts",
            h4 { "Recent answers" }
            ul {
                for (index, row) in rows.into_iter().enumerate() {
                    li { key: "{index}", class: step_class(row.correct),
                        span { class: "recent-attempts__time", "{row.answered_at_str}" }
                        span { class: "recent-attempts__level", "L{row.level}" }
                        span { class: "recent-attempts__prompt", "{row.prompt}" }
                        span { class: "recent-attempts__answer", "You: {row.given} | Answer: {row.expected}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> InputKind {
        InputKind::Choice(vec!["<".into(), "=".into(), ">".into()])
    }

    fn character(value: &str) -> Key {
        Key::Character(value.to_string())
    }

    #[test]
    fn enter_submits_typed_answers_but_not_choices() {
        assert_eq!(
            key_action(&Key::Enter, false, Some(&InputKind::Number)),
            Some(KeyAction::Dispatch(PracticeIntent::Submit))
        );
        assert_eq!(key_action(&Key::Enter, false, Some(&choices())), None);
        assert_eq!(key_action(&Key::Enter, false, None), None);
    }

    #[test]
    fn digits_pick_numbered_choices() {
        assert_eq!(
            key_action(&character("3"), false, Some(&choices())),
            Some(KeyAction::Dispatch(PracticeIntent::Choose(">".into())))
        );
        assert_eq!(key_action(&character("0"), false, Some(&choices())), None);
        assert_eq!(key_action(&character("4"), false, Some(&choices())), None);
        assert_eq!(key_action(&character("1"), false, Some(&InputKind::Number)), None);
    }

    #[test]
    fn feedback_moves_on_with_enter_or_n() {
        for key in [Key::Enter, character("n"), character("N")] {
            assert_eq!(
                key_action(&key, true, Some(&choices())),
                Some(KeyAction::Dispatch(PracticeIntent::Next))
            );
        }
        assert_eq!(key_action(&character("1"), true, Some(&choices())), None);
        assert_eq!(key_action(&Key::Escape, true, None), Some(KeyAction::Home));
    }
}
