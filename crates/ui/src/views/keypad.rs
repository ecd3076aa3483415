use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

use crate::vm::{KEYPAD_KEYS, keypad_event};

#[component]
pub fn Keypad(on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        div { class: "keypad",
            for label in KEYPAD_KEYS {
                button {
                    key: "{label}",
                    class: "keypad-key",
                    onclick: move |_| {
                        if let Some(event) = keypad_event(label) {
                            on_event.call(event);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
