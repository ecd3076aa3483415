use chrono::Local;
use dioxus::prelude::*;
use quiz_core::quiz::QuizEvent;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{DailyStatsVm, HistoryCardVm, map_daily_stats, map_history_cards};

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<HistoryCardVm>,
    days: Vec<DailyStatsVm>,
}

#[component]
pub fn HistoryView(on_event: EventHandler<QuizEvent>) -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.history_service();

    let resource = use_resource(move || {
        let history = history.clone();
        async move {
            let items = history.list_recent().await;
            let stats = history.daily_stats().await;
            HistoryData {
                cards: map_history_cards(&items, &Local),
                days: map_daily_stats(&stats),
            }
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        section { class: "history",
            header { class: "history-header",
                button {
                    class: "btn btn--ghost",
                    id: "history-back",
                    onclick: move |_| on_event.call(QuizEvent::Back),
                    "← 돌아가기"
                }
                h2 { "나의 기록" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "history-loading", "불러오는 중..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "history-empty", "아직 기록이 없어요. 첫 도전을 시작해보세요!" }
                    } else {
                        ul { class: "history-days",
                            for day in data.days {
                                li { key: "{day.date_str}",
                                    span { class: "history-day-date", "{day.date_str}" }
                                    span { "{day.quizzes_label}" }
                                    span { "{day.accuracy_label}" }
                                }
                            }
                        }
                        ul { class: "history-cards",
                            for card in data.cards {
                                HistoryCard { card }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardVm) -> Element {
    let badge = if card.is_high {
        "score-badge score-badge--high"
    } else {
        "score-badge"
    };

    rsx! {
        li { class: "history-card",
            div { class: "history-card-head",
                span { class: "history-date", "{card.date_str}" }
                span { class: "history-time", "{card.total_time_label}" }
                span { class: badge, "{card.score_label}" }
            }
            div { class: "history-dots",
                for (i, dot) in card.dots.iter().enumerate() {
                    span { key: "{i}", class: dot.class, title: "{dot.title}" }
                }
            }
        }
    }
}
