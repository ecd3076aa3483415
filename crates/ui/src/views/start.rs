use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

#[component]
pub fn StartView(on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        section { class: "start",
            h1 { class: "title", "수학 스파크!" }
            p { class: "subtitle", "두 자리 곱셈과 나눗셈 10문제에 도전해보세요." }
            button {
                class: "btn btn--primary",
                id: "start-begin",
                onclick: move |_| on_event.call(QuizEvent::Begin),
                "도전 시작!"
            }
            button {
                class: "btn btn--secondary",
                id: "start-history",
                onclick: move |_| on_event.call(QuizEvent::ViewHistory),
                "나의 기록"
            }
        }
    }
}
