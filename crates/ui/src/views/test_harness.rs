use std::sync::Arc;

use chrono::Duration;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QUESTIONS_PER_QUIZ, Question};
use quiz_core::quiz::{QuizEvent, QuizState, transition};
use quiz_core::time::{fixed_clock, fixed_now};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{AppServices, Clock, HistoryService, QuizService};
use storage::{SessionStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizFlow;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn history_service(&self) -> Arc<HistoryService> {
        self.services.history()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    initial: QuizState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        QuizFlow { initial: props.initial.clone() }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sessions: SessionStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_view_harness(initial: QuizState) -> ViewHarness {
    let storage = Storage::in_memory();
    let sessions = SessionStore::new(Arc::clone(&storage.kv));
    let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()), Some(7));
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            initial,
        },
    );
    ViewHarness { dom, sessions }
}

/// Ten copies of `23 × 4`, so every answer is 92.
pub fn fixed_questions() -> Vec<Question> {
    (0..QUESTIONS_PER_QUIZ)
        .map(|i| Question::multiplication(format!("q-{i}"), 23, 4))
        .collect()
}

/// Feed `events` through the reducer, advancing the clock by `step` per event.
pub fn replay(initial: QuizState, events: &[QuizEvent], step: Duration) -> QuizState {
    let mut rng = StdRng::seed_from_u64(3);
    let mut clock = fixed_clock();
    let mut state = initial;
    for event in events {
        clock.advance(step);
        state = transition(&state, *event, clock.now(), &mut rng).state;
    }
    state
}

/// Events answering every question, the first `correct` of them right.
pub fn answer_run(correct: usize) -> Vec<QuizEvent> {
    let mut events = Vec::new();
    for i in 0..QUESTIONS_PER_QUIZ {
        let reply = if i < correct { "92" } else { "90" };
        events.extend(reply.chars().map(QuizEvent::Digit));
        events.push(QuizEvent::Submit);
        events.push(QuizEvent::Next);
    }
    events
}
