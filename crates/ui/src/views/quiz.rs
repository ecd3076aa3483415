use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

use crate::views::Keypad;
use crate::vm::QuizVm;

#[component]
pub fn QuizView(vm: QuizVm, on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        section { class: "quiz",
            header { class: "quiz-progress",
                span { class: "quiz-position", "{vm.position_label}" }
                div { class: "quiz-dots",
                    for (i, dot) in vm.dots.iter().enumerate() {
                        span { key: "{i}", class: dot.class }
                    }
                }
            }

            p { class: "quiz-operation", "{vm.operation_label}" }
            div { class: "quiz-problem",
                span { "{vm.num1}" }
                span { class: "quiz-symbol", "{vm.symbol}" }
                span { "{vm.num2}" }
                span { "=" }
                span { class: "quiz-input", "{vm.input_display}" }
            }

            Keypad { on_event }

            button {
                class: "btn btn--primary",
                id: "quiz-submit",
                onclick: move |_| on_event.call(QuizEvent::Submit),
                "정답 확인!"
            }
        }
    }
}
