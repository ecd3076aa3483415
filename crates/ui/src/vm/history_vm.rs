use std::fmt::Display;

use chrono::TimeZone;
use services::{DailyStats, HistoryListItem};

use crate::vm::time_fmt::{format_seconds, format_session_date};

/// Scores at or above this are highlighted.
const HIGH_SCORE: u32 = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryDotVm {
    pub class: &'static str,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub date_str: String,
    pub total_time_label: String,
    pub score_label: String,
    pub is_high: bool,
    pub dots: Vec<HistoryDotVm>,
}

/// Map history items to cards, rendering dates in `tz`.
#[must_use]
pub fn map_history_cards<Tz>(items: &[HistoryListItem], tz: &Tz) -> Vec<HistoryCardVm>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    items
        .iter()
        .map(|item| HistoryCardVm {
            date_str: format_session_date(&item.completed_at.with_timezone(tz)),
            total_time_label: format!("{:.1}초", item.total_time),
            score_label: format!("{}점", item.score),
            is_high: item.score >= HIGH_SCORE,
            dots: item
                .marks
                .iter()
                .map(|mark| HistoryDotVm {
                    class: if mark.is_correct {
                        "history-dot history-dot--correct"
                    } else {
                        "history-dot history-dot--wrong"
                    },
                    title: mark
                        .time_taken
                        .map(|t| format!("{}초", format_seconds(t)))
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyStatsVm {
    pub date_str: String,
    pub quizzes_label: String,
    pub accuracy_label: String,
}

#[must_use]
pub fn map_daily_stats(stats: &[DailyStats]) -> Vec<DailyStatsVm> {
    stats
        .iter()
        .map(|day| {
            let percent = if day.total_questions == 0 {
                0
            } else {
                day.correct_answers * 100 / day.total_questions
            };
            DailyStatsVm {
                date_str: day.date.format("%Y년 %-m월 %-d일").to_string(),
                quizzes_label: format!("{}회 도전", day.total_quizzes),
                accuracy_label: format!(
                    "{} / {} 정답 ({percent}%)",
                    day.correct_answers, day.total_questions
                ),
            }
        })
        .collect()
}
