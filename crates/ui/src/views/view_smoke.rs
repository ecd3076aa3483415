use chrono::Duration;
use quiz_core::model::{QUESTIONS_PER_QUIZ, Question, QuizSession};
use quiz_core::quiz::{QuizEvent, QuizState, Screen};
use quiz_core::time::fixed_now;

use super::test_harness::{answer_run, fixed_questions, replay, setup_view_harness};

fn in_progress() -> QuizState {
    QuizState::in_progress(fixed_questions(), fixed_now())
}

fn history_state() -> QuizState {
    replay(QuizState::new(), &[QuizEvent::ViewHistory], Duration::zero())
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_renders_actions() {
    let mut harness = setup_view_harness(QuizState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("수학 스파크!"), "missing title in {html}");
    assert!(html.contains("도전 시작!"), "missing begin button in {html}");
    assert!(html.contains("나의 기록"), "missing history button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_problem_and_keypad() {
    let mut harness = setup_view_harness(in_progress());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 / 10"), "missing position in {html}");
    assert!(html.contains("곱하기"), "missing operation in {html}");
    assert!(html.contains("23"), "missing operand in {html}");
    assert!(html.contains('×'), "missing symbol in {html}");
    assert!(html.contains('?'), "missing placeholder in {html}");
    assert!(html.contains('⌫'), "missing delete key in {html}");
    assert!(html.contains("정답 확인!"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_renders_correct_answer_time() {
    // Typing two digits then submitting spends three 0.8 s steps.
    let events = [QuizEvent::Digit('9'), QuizEvent::Digit('2'), QuizEvent::Submit];
    let state = replay(in_progress(), &events, Duration::milliseconds(800));
    assert_eq!(state.screen(), Screen::Feedback);

    let mut harness = setup_view_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("정답! 2.4초 컷!"), "missing headline in {html}");
    assert!(html.contains("23 × 4 = 92"), "missing equation in {html}");
    assert!(html.contains("다음 문제!"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_renders_expected_answer_when_wrong() {
    let events = [QuizEvent::Digit('9'), QuizEvent::Digit('0'), QuizEvent::Submit];
    let state = replay(in_progress(), &events, Duration::seconds(1));

    let mut harness = setup_view_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("다음엔 더 빨리!"), "missing headline in {html}");
    assert!(html.contains("정답은 92 이었어요."), "missing correct answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_renders_score() {
    let state = replay(in_progress(), &answer_run(6), Duration::milliseconds(500));
    assert_eq!(state.screen(), Screen::Summary);

    let mut harness = setup_view_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("도전 완료!"), "missing headline in {html}");
    assert!(html.contains("60점"), "missing score in {html}");
    assert!(html.contains("총 소요 시간: 15.0초"), "missing total time in {html}");
    assert!(html.contains("한번 더!"), "missing retry in {html}");
    assert!(html.contains("메인으로"), "missing home in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_renders_empty_state() {
    let mut harness = setup_view_harness(history_state());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("아직 기록이 없어요. 첫 도전을 시작해보세요!"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_renders_saved_session() {
    let mut harness = setup_view_harness(history_state());
    let questions: Vec<Question> = fixed_questions()
        .into_iter()
        .enumerate()
        .map(|(i, q)| q.answered(Some(if i < 8 { 92 } else { 1 }), 2.0))
        .collect();
    assert_eq!(questions.len(), QUESTIONS_PER_QUIZ);
    let session = QuizSession::complete(questions, fixed_now()).expect("session");
    harness.sessions.append(&session).await.expect("append");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("80점"), "missing score badge in {html}");
    assert!(html.contains("score-badge--high"), "missing highlight in {html}");
    assert!(html.contains("20.0초"), "missing total time in {html}");
    assert!(html.contains("1회 도전"), "missing daily totals in {html}");
}
