use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

use crate::vm::FeedbackVm;

#[component]
pub fn FeedbackView(vm: FeedbackVm, on_event: EventHandler<QuizEvent>) -> Element {
    let class = if vm.is_correct {
        "feedback feedback--correct"
    } else {
        "feedback feedback--wrong"
    };

    rsx! {
        section { class: "{class}",
            if vm.is_correct {
                h2 { "정답! {vm.time_label}초 컷!" }
                p { class: "feedback-equation", "{vm.equation}" }
            } else {
                h2 { "다음엔 더 빨리!" }
                p { class: "feedback-answer", "정답은 {vm.correct_answer} 이었어요." }
            }
            button {
                class: "btn btn--primary",
                id: "feedback-next",
                onclick: move |_| on_event.call(QuizEvent::Next),
                "{vm.next_label}"
            }
        }
    }
}
