use dioxus::prelude::*;
use quiz_core::quiz::{QuizEvent, QuizState, Screen, Transition};

use crate::context::AppContext;
use crate::views::{FeedbackView, HistoryView, QuizView, StartView, SummaryView};
use crate::vm::{keyboard_event, map_feedback, map_quiz, map_summary};

#[component]
pub fn QuizRoot() -> Element {
    rsx! {
        QuizFlow { initial: QuizState::new() }
    }
}

/// Owns the quiz state signal and routes every user intent through the quiz service.
#[component]
pub fn QuizFlow(initial: QuizState) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();
    let state = use_signal(|| initial);

    // The next state lands in the signal before any await; only saving runs in the background.
    let dispatch = use_callback(move |event: QuizEvent| {
        let mut state = state;
        let Transition { state: next, effect } = quiz.step(&state.peek(), event);
        state.set(next);
        if let Some(effect) = effect {
            let quiz = quiz.clone();
            spawn(async move {
                quiz.persist(effect).await;
            });
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let screen = state.read().screen();
        if let Some(event) = keyboard_event(screen, &evt.key().to_string()) {
            evt.prevent_default();
            dispatch.call(event);
        }
    });

    let current = state.read().clone();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match current.screen() {
                Screen::Start => rsx! {
                    StartView { on_event: dispatch }
                },
                Screen::Quiz => match map_quiz(&current) {
                    Some(vm) => rsx! {
                        QuizView { vm, on_event: dispatch }
                    },
                    None => rsx! {},
                },
                Screen::Feedback => match map_feedback(&current) {
                    Some(vm) => rsx! {
                        FeedbackView { vm, on_event: dispatch }
                    },
                    None => rsx! {},
                },
                Screen::Summary => rsx! {
                    SummaryView { vm: map_summary(&current), on_event: dispatch }
                },
                Screen::History => rsx! {
                    HistoryView { on_event: dispatch }
                },
            }
        }
    }
}
