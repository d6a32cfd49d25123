//! Integration tests for the interview scorer

use interview_scorer::config::{Config, OutputFormat};
use interview_scorer::input::InputManager;
use interview_scorer::output::{InterviewReport, ReportGenerator, ReportMetadata};
use interview_scorer::processing::analyzer::{AnalysisBundle, AnswerAnalyzer, AnswerInput};
use interview_scorer::processing::facial::{EyeContact, Nervousness};
use interview_scorer::processing::feedback::{get_feedback, FeedbackGenerator};
use interview_scorer::session::{InterviewSession, ScoredAnswer, SessionStore};
use interview_scorer::{analyze_answer, InterviewScorerError};
use std::path::Path;
use std::sync::Arc;

fn score(analyzer: &AnswerAnalyzer, input: &AnswerInput) -> ScoredAnswer {
    let bundle = analyzer.analyze(input);
    ScoredAnswer {
        question: input.question.clone(),
        answer: input.text.clone(),
        feedback: get_feedback(&bundle),
        bundle,
    }
}

#[tokio::test]
async fn test_transcript_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .load_answer(Path::new("tests/fixtures/sample_answer.txt"))
        .await
        .unwrap();

    assert!(text.contains("payments platform"));

    let bundle = analyze_answer(&text, "Describe how you made the checkout service reliable.", None, Some(40.0));
    assert!(bundle.content_quality.uses_star_method);
    assert!(bundle.content_quality.has_quantifiable_results);
    assert_eq!(bundle.content_quality.quality_score, 100.0);
    assert!(bundle.clarity.has_structure);
    // checkout, service, reliable out of five question words
    assert_eq!(bundle.relevance.keyword_overlap, 3);
    assert_eq!(bundle.relevance.relevance_score, 90.0);
    assert!(bundle.overall_score > 60.0);
}

#[test]
fn test_default_analyzer_is_shared_and_infallible() {
    let question = "How did you improve latency?";
    let text = "For example, I implemented a cache and reduced latency by 40%.";

    let first = analyze_answer(text, question, None, None);
    let second = analyze_answer(text, question, None, None);
    assert_eq!(first, second);
    assert_eq!(
        first,
        AnswerAnalyzer::new().unwrap().analyze_answer(text, question, None, 0.0)
    );
    assert_eq!(analyze_answer("", question, None, None), AnalysisBundle::empty());
}

#[tokio::test]
async fn test_transcript_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .load_answer(Path::new("tests/fixtures/sample_answer.md"))
        .await
        .unwrap();

    assert!(text.contains("led the migration"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();

    assert!(matches!(
        manager.load_answer(Path::new("tests/fixtures/unsupported.xyz")).await,
        Err(InterviewScorerError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        manager.load_answer(Path::new("tests/fixtures/nonexistent.txt")).await,
        Err(InterviewScorerError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_video_signal_fixture() {
    let mut manager = InputManager::new();
    let signal = manager
        .load_video_signal(Path::new("tests/fixtures/video_signal.json"))
        .await
        .unwrap();

    let analyzer = AnswerAnalyzer::new().unwrap();
    let input = AnswerInput::new("I managed the release.", "What did you manage?").with_video(signal);
    let bundle = analyzer.analyze(&input);
    let facial = bundle.facial.as_ref().unwrap();

    assert_eq!(facial.nervousness, Nervousness::High);
    assert_eq!(facial.eye_contact, EyeContact::NeedsImprovement);
    // engagement 48, worried -10
    assert_eq!(facial.confidence_level, 38.0);

    let feedback = FeedbackGenerator::with_limit(20).generate(&bundle);
    assert!(feedback.iter().any(|f| f.starts_with("Maintain better eye contact")));
    assert!(feedback.iter().any(|f| f.starts_with("Try to relax")));
    assert!(feedback.iter().any(|f| f.starts_with("Show more enthusiasm")));
}

#[tokio::test]
async fn test_session_file_end_to_end() {
    let transcript = InputManager::new()
        .load_session(Path::new("tests/fixtures/sample_session.json"))
        .await
        .unwrap();
    assert_eq!(transcript.id.as_deref(), Some("mock-interview-1"));

    let analyzer = Arc::new(AnswerAnalyzer::new().unwrap());
    let handles: Vec<_> = transcript
        .answers
        .iter()
        .map(|entry| {
            let analyzer = Arc::clone(&analyzer);
            let input = entry.to_input();
            tokio::task::spawn_blocking(move || score(&analyzer, &input))
        })
        .collect();

    let mut store = SessionStore::new();
    store.create("mock-interview-1").unwrap();
    for handle in handles {
        store.record_answer("mock-interview-1", handle.await.unwrap()).unwrap();
    }

    let session = store.get("mock-interview-1").unwrap();
    assert_eq!(session.answers.len(), 3);

    let strong = &session.answers[0];
    let rambling = &session.answers[1];
    let empty = &session.answers[2];

    assert!(strong.bundle.overall_score > rambling.bundle.overall_score);
    assert_eq!(empty.bundle, AnalysisBundle::empty());
    assert_eq!(empty.bundle.overall_score, 0.0);

    let speech = rambling.bundle.speech.as_ref().unwrap();
    assert_eq!(speech.filler_word_count, 4);
    assert_eq!(speech.stuttering_instances, 1);
    assert_eq!(
        rambling.feedback[3],
        "Reduce filler words (found 4 instances of 'um', 'uh', 'like')"
    );

    for answer in &session.answers {
        assert!(!answer.feedback.is_empty() && answer.feedback.len() <= 5);
    }

    let metrics = session.metrics(70.0);
    assert_eq!(metrics.answer_count, 3);
    assert_eq!(metrics.eye_contact, Some(78.0));

    let report = InterviewReport::from_session(
        session,
        analyzer.weights(),
        70.0,
        ReportMetadata::new("tests/fixtures/sample_session.json", 3, 1, analyzer.sentiment_model_name()),
    );
    let json = ReportGenerator::with_options(false, true, false, true)
        .generate_report(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["answers"].as_array().unwrap().len(), 3);
    assert_eq!(value["metadata"]["answer_count"], 3);

    let console = ReportGenerator::with_options(false, true, true, true)
        .generate_report(&report, OutputFormat::Console)
        .unwrap();
    assert!(console.contains("Q2: Why do you want to work here?"));
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let analyzer = Arc::new(AnswerAnalyzer::new().unwrap());
    let inputs: Vec<AnswerInput> = (0..8)
        .map(|i| {
            AnswerInput::new(
                format!("For example, in sprint {} I implemented caching and reduced latency by {}%.", i, i * 5),
                "How did you improve performance?",
            )
            .with_duration(6.0 + i as f64)
        })
        .collect();

    let sequential: Vec<AnalysisBundle> = inputs.iter().map(|input| analyzer.analyze(input)).collect();

    let threads: Vec<_> = inputs
        .clone()
        .into_iter()
        .map(|input| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || analyzer.analyze(&input))
        })
        .collect();
    let parallel: Vec<AnalysisBundle> = threads.into_iter().map(|t| t.join().unwrap()).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_custom_weights_change_overall_score() {
    let text = "For example, I implemented a cache and reduced latency by 40%.";
    let question = "How did you improve latency?";

    let default_score = AnswerAnalyzer::new().unwrap().analyze_answer(text, question, None, 0.0).overall_score;

    let mut config = Config::default();
    config.set_value("weights.content_quality", "0.95").unwrap();
    config.set_value("weights.relevance", "0.05").unwrap();
    config.set_value("weights.clarity", "0.0").unwrap();
    config.set_value("weights.sentiment", "0.0").unwrap();
    config.set_value("weights.professionalism", "0.0").unwrap();
    config.set_value("weights.speech", "0.0").unwrap();
    config.set_value("weights.facial", "0.0").unwrap();

    let custom = AnswerAnalyzer::from_config(&config)
        .unwrap()
        .analyze_answer(text, question, None, 0.0);

    assert_ne!(custom.overall_score, default_score);
    assert!((0.0..=100.0).contains(&custom.overall_score));
}

#[test]
fn test_single_answer_session_report() {
    let analyzer = AnswerAnalyzer::new().unwrap();
    let mut session = InterviewSession::new("single");
    session.record(score(&analyzer, &AnswerInput::new("   ", "Introduce yourself.")));

    let summary = session.summary(70.0);
    assert_eq!(summary.metrics.overall_score, 0.0);
    assert_eq!(summary.strengths, vec!["Shows potential for growth".to_string()]);
    assert!(summary.action_items.len() <= 5);
}
