use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryView(vm: SummaryVm, on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        section { class: "summary",
            h2 { "도전 완료!" }
            p { class: "summary-score", "{vm.score}점" }
            p { class: "summary-time", "총 소요 시간: {vm.total_time_label}초" }
            div { class: "summary-actions",
                button {
                    class: "btn btn--primary",
                    id: "summary-retry",
                    onclick: move |_| on_event.call(QuizEvent::Retry),
                    "한번 더!"
                }
                button {
                    class: "btn btn--secondary",
                    id: "summary-home",
                    onclick: move |_| on_event.call(QuizEvent::Home),
                    "메인으로"
                }
            }
        }
    }
}
