//! Integration tests for quizbook

use std::fs;

use quizbook::{
    Letter, LoadError, LoadOptions, Modes, QuizError, QuizSession, ScoreReport, TestBackend,
    library,
};

const TWO_QUESTIONS: &str = r#"[
    {"question": "Q1", "answer": "B. x"},
    {"question": "Q2", "answer": "C", "options": ["a", "b", "c", "d"]}
]"#;

fn load(text: &str) -> Result<quizbook::Quiz, LoadError> {
    quizbook::load_str(text, "sample.json", &LoadOptions::default())
}

#[test]
fn test_two_question_document() {
    let quiz = load(TWO_QUESTIONS).unwrap();

    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz.title, "sample");
    assert_eq!(quiz.questions()[0].correct(), Some(Letter::B));
    assert_eq!(quiz.questions()[1].correct(), Some(Letter::C));
    assert_eq!(
        quiz.questions()[1].options().unwrap(),
        &["A) a", "B) b", "C) c", "D) d"]
    );
}

#[test]
fn test_empty_questions_fails() {
    assert!(matches!(
        load(r#"{"questions": []}"#),
        Err(LoadError::NoValidQuestions)
    ));
}

#[test]
fn test_valid_entries_survive_among_malformed() {
    let quiz = load(
        r#"[
            {"question": "first", "answer": "A"},
            {"question": "no answer"},
            {"answer": "no question"},
            {"question": "second", "answer": "d"}
        ]"#,
    )
    .unwrap();

    let texts: Vec<&str> = quiz.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn test_tolerant_document() {
    let text = "\u{feff}{
        // quiz header
        \"metadata\": {\"title\": \"Loose // Quiz\", \"chapter\": 3,},
        /* config block */
        \"config\": {\"slides_mode\": {\"enabled\": true}},
        \"questions\": [
            {\"question\": \"See http://example.com\", \"answer\": \"a\",},
        ],
    }";

    let quiz = load(text).unwrap();
    assert_eq!(quiz.title, "Loose // Quiz");
    assert_eq!(quiz.questions()[0].text(), "See http://example.com");
    assert_eq!(quiz.config.slides_mode, Some(true));
    assert_eq!(quiz.metadata.get("chapter").map(String::as_str), Some("3"));
}

#[test]
fn test_record_then_clear_is_unanswered() {
    let mut session = QuizSession::start(load(TWO_QUESTIONS).unwrap());
    session.record_answer(Some(Letter::B));
    session.record_answer(None);

    let progress = session.progress();
    assert_eq!(progress.answered, 0);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.position, 1);
}

#[test]
fn test_half_score() {
    let report = quizbook::take(
        load(TWO_QUESTIONS).unwrap(),
        Modes::default(),
        &TestBackend::new().choose(Letter::B),
    )
    .unwrap();

    assert_eq!(report.correct, 1);
    assert_eq!(report.total, 2);
    assert_eq!(report.percentage(), 50.0);
    assert_eq!(report.headline(), "Score: 1/2 (50.0%)");
}

#[test]
fn test_scripted_navigation() {
    let backend = TestBackend::new()
        .next()
        .choose(Letter::C)
        .jump_to_unanswered()
        .choose(Letter::A)
        .previous()
        .previous();

    let report = quizbook::take(load(TWO_QUESTIONS).unwrap(), Modes::default(), &backend).unwrap();
    assert_eq!(report.rows[0].chosen, Some(Letter::A));
    assert_eq!(report.rows[1].chosen, Some(Letter::C));
    assert_eq!(report.correct, 1);
}

#[test]
fn test_answering_helper() {
    let backend = TestBackend::new().answering([Some(Letter::B), None]);
    let report = quizbook::take(load(TWO_QUESTIONS).unwrap(), Modes::default(), &backend).unwrap();
    assert_eq!(report.rows[1].chosen_label(), "-");
    assert_eq!(report.correct, 1);
}

#[test]
fn test_backend_errors_are_reported() {
    let backend = TestBackend::new()
        .answering([Some(Letter::A), Some(Letter::A)])
        .jump_to_unanswered();

    let err = quizbook::take(load(TWO_QUESTIONS).unwrap(), Modes::default(), &backend).unwrap_err();
    assert!(matches!(err, QuizError::Backend(_)));
    assert!(!err.is_cancelled());
}

#[test]
fn test_load_file_and_save_report() {
    let dir = tempfile::tempdir().unwrap();
    let quiz_path = dir.path().join("chapter1.json");
    fs::write(&quiz_path, TWO_QUESTIONS).unwrap();

    let quiz = quizbook::load_file(&quiz_path, &LoadOptions::default()).unwrap();
    assert_eq!(quiz.title, "chapter1");

    let mut session = QuizSession::start(quiz);
    session.record_answer(Some(Letter::B));
    session.advance();
    session.record_answer(Some(Letter::D));

    let report = ScoreReport::score(&session);
    let out = dir.path().join("quiz_results.txt");
    report.save(&out).unwrap();

    let saved = fs::read_to_string(&out).unwrap();
    assert!(saved.starts_with("Score: 1/2 (50.0%)\n"));
    assert!(saved.contains("2  D     C       ✗"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = quizbook::load_file(dir.path().join("absent.json"), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_library_titles() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("b.json"),
        r#"{"metadata": {"title": "Graphs"}, "questions": [{"question": "Q", "answer": "A"}]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("a.json"), TWO_QUESTIONS).unwrap();
    fs::write(dir.path().join("c.json"), "{ not json").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let entries = library::scan(dir.path()).unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["a.json", "Graphs", "c.json"]);
    assert_eq!(entries[1].path, dir.path().join("b.json"));
}

#[test]
fn test_empty_library() {
    let dir = tempfile::tempdir().unwrap();
    assert!(library::scan(dir.path()).unwrap().is_empty());
}

#[test]
fn test_config_applies_to_modes() {
    let quiz = load(
        r#"{"config": {"learning_mode": {"instant_feedback": true}},
            "questions": [{"question": "Q", "answer": "A"}]}"#,
    )
    .unwrap();

    let mut modes = Modes::default();
    quiz.config.apply(&mut modes);
    assert!(modes.learning);
    assert!(!modes.slides);
}
