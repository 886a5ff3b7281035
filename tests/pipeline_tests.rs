//! End-to-end pipeline behaviour against a scripted completion service.

use chrono::NaiveDate;
use event_assist::adapters::ai::MockCompletionAdapter;
use event_assist::adapters::clock::FixedClock;
use event_assist::adapters::ui::{ConsoleRunner, EXAMPLE_INPUT, NOT_AN_EVENT_MESSAGE};
use event_assist::domain::{
    ConfirmationResult, DomainError, EventDetails, ExtractionResult, ServiceError,
};
use event_assist::ports::StructuredOutput;
use event_assist::shared::{AppConfig, build_pipeline};
use event_assist::usecases::{EventPipeline, PipelineSettings};
use std::sync::Arc;

const EXTRACTION: &str = ExtractionResult::SCHEMA_NAME;
const DETAILS: &str = EventDetails::SCHEMA_NAME;
const CONFIRMATION: &str = ConfirmationResult::SCHEMA_NAME;

fn pipeline(mock: &Arc<MockCompletionAdapter>) -> EventPipeline {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    EventPipeline::new(
        mock.clone(),
        Arc::new(FixedClock(today)),
        PipelineSettings::default(),
    )
}

fn extraction(description: &str, is_event: bool, score: f64) -> ExtractionResult {
    ExtractionResult {
        description: description.to_string(),
        is_calendar_event: is_event,
        confidence_score: score,
    }
}

fn team_meeting() -> EventDetails {
    EventDetails {
        name: "Team Meeting".to_string(),
        date: "2026-10-20T14:00:00".to_string(),
        duration_minutes: 60,
        participants: vec!["Alice".to_string(), "Bob".to_string()],
    }
}

fn confirmation() -> ConfirmationResult {
    ConfirmationResult {
        confirmation_message: "Your Team Meeting with Alice and Bob is set for Tuesday, \
                               October 20 at 2pm.\n\nBest,\nSusie"
            .to_string(),
        calendar_link: None,
    }
}

#[tokio::test]
async fn team_meeting_returns_stubbed_confirmation() {
    let mock = Arc::new(MockCompletionAdapter::new());
    let description = "1h team meeting next Tuesday at 2pm with Alice and Bob about the roadmap";
    mock.respond_with(&extraction(description, true, 0.95))
        .respond_with(&team_meeting())
        .respond_with(&confirmation());

    let outcome = pipeline(&mock).process(EXAMPLE_INPUT).await.unwrap();
    assert_eq!(outcome, Some(confirmation()));

    let calls = mock.calls();
    let order: Vec<&str> = calls.iter().map(|c| c.schema.name.as_str()).collect();
    assert_eq!(order, vec![EXTRACTION, DETAILS, CONFIRMATION]);
    assert_eq!(calls[0].user_content(), Some(EXAMPLE_INPUT));
    assert_eq!(calls[1].user_content(), Some(description));

    let sent: EventDetails = serde_json::from_str(calls[2].user_content().unwrap()).unwrap();
    assert_eq!(sent, team_meeting());
}

#[tokio::test]
async fn weather_question_is_not_an_event() {
    let mock = Arc::new(MockCompletionAdapter::new());
    mock.respond_with(&extraction("Question about the weather", false, 0.98));

    let outcome = pipeline(&mock).process("What's the weather today?").await.unwrap();
    assert_eq!(outcome, None);
    assert_eq!(mock.call_count(EXTRACTION), 1);
    assert_eq!(mock.call_count(DETAILS), 0);
    assert_eq!(mock.call_count(CONFIRMATION), 0);
}

#[tokio::test]
async fn low_confidence_event_is_dropped() {
    let mock = Arc::new(MockCompletionAdapter::new());
    mock.respond_with(&extraction("Maybe coffee at some point", true, 0.69));

    let outcome = pipeline(&mock).process("maybe coffee sometime?").await.unwrap();
    assert_eq!(outcome, None);
    assert_eq!(mock.call_count(DETAILS), 0);
    assert_eq!(mock.call_count(CONFIRMATION), 0);
}

#[tokio::test]
async fn threshold_boundary_is_inclusive() {
    let mock = Arc::new(MockCompletionAdapter::new());
    mock.respond_with(&extraction("Coffee with Dana Monday 9am", true, 0.7))
        .respond_with(&team_meeting())
        .respond_with(&confirmation());

    let outcome = pipeline(&mock).process("coffee with Dana monday 9am").await.unwrap();
    assert!(outcome.is_some());
    assert_eq!(mock.call_count(DETAILS), 1);
    assert_eq!(mock.call_count(CONFIRMATION), 1);
}

#[tokio::test]
async fn extraction_failure_propagates_unchanged() {
    let mock = Arc::new(MockCompletionAdapter::new());
    let failure = ServiceError::Transport("connection reset".to_string());
    mock.fail(EXTRACTION, failure.clone());

    let err = pipeline(&mock).process("anything").await.unwrap_err();
    assert_eq!(err, DomainError::Service(failure));
    assert_eq!(mock.calls().len(), 1);
}

#[tokio::test]
async fn detail_failure_stops_before_confirmation() {
    let mock = Arc::new(MockCompletionAdapter::new());
    let failure = ServiceError::Api {
        status: 429,
        message: "quota exceeded".to_string(),
    };
    mock.respond_with(&extraction("Team meeting", true, 0.9))
        .fail(DETAILS, failure.clone());

    let err = pipeline(&mock).process("team meeting").await.unwrap_err();
    assert_eq!(err, DomainError::Service(failure));
    assert_eq!(mock.call_count(CONFIRMATION), 0);
}

#[tokio::test]
async fn confirmation_failure_propagates_unchanged() {
    let mock = Arc::new(MockCompletionAdapter::new());
    let failure = ServiceError::Refused("cannot comply".to_string());
    mock.respond_with(&extraction("Team meeting", true, 0.9))
        .respond_with(&team_meeting())
        .fail(CONFIRMATION, failure.clone());

    let err = pipeline(&mock).process("team meeting").await.unwrap_err();
    assert_eq!(err, DomainError::Service(failure));
    assert_eq!(mock.calls().len(), 3);
}

#[tokio::test]
async fn concurrent_invocations_are_independent() {
    let mock = Arc::new(MockCompletionAdapter::with_delay(10));
    mock.respond_with(&extraction("Not an event", false, 0.1))
        .respond_with(&extraction("Also not an event", false, 0.2));
    let pipeline = Arc::new(pipeline(&mock));

    let a = tokio::spawn({
        let pipeline = Arc::clone(&pipeline);
        async move { pipeline.process("first").await }
    });
    let b = tokio::spawn({
        let pipeline = Arc::clone(&pipeline);
        async move { pipeline.process("second").await }
    });

    assert_eq!(a.await.unwrap().unwrap(), None);
    assert_eq!(b.await.unwrap().unwrap(), None);
    assert_eq!(mock.call_count(EXTRACTION), 2);
}

#[tokio::test]
async fn console_renders_not_an_event() {
    let mock = Arc::new(MockCompletionAdapter::new());
    mock.respond_with(&extraction("weather", false, 0.9));
    let runner = ConsoleRunner::new(Arc::new(pipeline(&mock)));

    assert_eq!(runner.run("What's the weather today?").await.unwrap(), NOT_AN_EVENT_MESSAGE);
}

#[test]
fn missing_credential_fails_fast() {
    let err = build_pipeline(&AppConfig::default()).err();
    match err {
        Some(DomainError::Config(msg)) => assert!(msg.contains("OPENAI_API_KEY")),
        other => panic!("expected config error, got {:?}", other),
    }
}
