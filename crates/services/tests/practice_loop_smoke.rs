use std::collections::BTreeMap;
use std::sync::Arc;

use drill_core::time::fixed_now;
use drill_core::{
    AnswerError, DifficultyChange, Exercise, PracticePhase, Response, SessionId, TopicId,
};
use services::{Clock, PracticeError, PracticeLoopService, PracticeSettings};
use storage::repository::{InMemorySessionStore, StorageError};

fn loop_service(seed: u64) -> PracticeLoopService {
    PracticeLoopService::with_settings(
        Clock::fixed(fixed_now()),
        Arc::new(InMemorySessionStore::new()),
        PracticeSettings {
            seed: Some(seed),
            start_levels: BTreeMap::new(),
        },
    )
}

#[tokio::test]
async fn practice_loop_raises_level_on_correct_answers() {
    let svc = loop_service(7);
    let session = svc.open_session().await.unwrap();

    for expected_level in 1..=3 {
        let problem = svc
            .next_question(session, TopicId::CompareFractions)
            .await
            .unwrap();
        let feedback = svc
            .submit(session, TopicId::CompareFractions, &problem.canonical_response())
            .await
            .unwrap();
        assert!(feedback.assessment.correct);
        assert_eq!(feedback.level, (expected_level + 1).min(3));
    }

    let state = svc
        .topic_state(session, TopicId::CompareFractions)
        .await
        .unwrap();
    assert_eq!(state.answered(), 3);
    assert_eq!(state.best_streak(), 3);
    assert_eq!(state.attempts().len(), 3);
}

#[tokio::test]
async fn facts_ramp_every_third_answer() {
    let svc = loop_service(8);
    let session = svc.open_session().await.unwrap();
    let mut changes = Vec::new();

    for _ in 0..3 {
        let problem = svc
            .next_question(session, TopicId::MultiplicationFacts)
            .await
            .unwrap();
        let feedback = svc
            .submit(
                session,
                TopicId::MultiplicationFacts,
                &problem.canonical_response(),
            )
            .await
            .unwrap();
        changes.push(feedback.change);
    }

    assert_eq!(
        changes,
        vec![
            DifficultyChange::Unchanged,
            DifficultyChange::Unchanged,
            DifficultyChange::Raised { from: 1, to: 2 },
        ]
    );
}

#[tokio::test]
async fn malformed_input_does_not_advance() {
    let svc = loop_service(9);
    let session = svc.open_session().await.unwrap();
    let problem = svc
        .next_question(session, TopicId::SimplifyFraction)
        .await
        .unwrap();

    let err = svc
        .submit(session, TopicId::SimplifyFraction, &Response::text("a/b"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PracticeError::Answer(AnswerError::InvalidFraction(_))
    ));

    let state = svc
        .topic_state(session, TopicId::SimplifyFraction)
        .await
        .unwrap();
    assert_eq!(state.answered(), 0);
    assert_eq!(
        state.phase(),
        &PracticePhase::AwaitingAnswer {
            problem: problem.clone()
        }
    );

    // Resubmitting a readable answer works.
    let feedback = svc
        .submit(
            session,
            TopicId::SimplifyFraction,
            &problem.canonical_response(),
        )
        .await
        .unwrap();
    assert!(feedback.assessment.correct);
}

#[tokio::test]
async fn submit_twice_is_an_invalid_transition() {
    let svc = loop_service(10);
    let session = svc.open_session().await.unwrap();
    let problem = svc.next_question(session, TopicId::Rounding).await.unwrap();
    svc.submit(session, TopicId::Rounding, &problem.canonical_response())
        .await
        .unwrap();

    let err = svc
        .submit(session, TopicId::Rounding, &problem.canonical_response())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PracticeError::NotAwaitingAnswer {
            topic: TopicId::Rounding
        }
    ));
}

#[tokio::test]
async fn start_levels_are_clamped_and_reset_restores_them() {
    let mut start_levels = BTreeMap::new();
    start_levels.insert(TopicId::LongDivision, 9);
    let svc = PracticeLoopService::with_settings(
        Clock::fixed(fixed_now()),
        Arc::new(InMemorySessionStore::new()),
        PracticeSettings {
            seed: Some(11),
            start_levels,
        },
    );
    let session = svc.open_session().await.unwrap();
    assert_eq!(svc.start_level(TopicId::LongDivision), 3);

    let problem = svc
        .next_question(session, TopicId::LongDivision)
        .await
        .unwrap();
    let feedback = svc
        .submit(session, TopicId::LongDivision, &Response::fields(["0", "0"]))
        .await
        .unwrap();
    assert!(!feedback.assessment.correct);
    assert_eq!(feedback.level, 2);
    assert_eq!(feedback.assessment.expected, problem.expected());

    let state = svc
        .reset_topic(session, TopicId::LongDivision)
        .await
        .unwrap();
    assert_eq!(state.level(), 3);
    assert_eq!(state.answered(), 0);
    assert_eq!(state.phase(), &PracticePhase::NoQuestion);
}

#[tokio::test]
async fn progress_covers_every_topic() {
    let svc = loop_service(12);
    let session = svc.open_session().await.unwrap();
    let problem = svc.next_question(session, TopicId::Addition).await.unwrap();
    svc.submit(session, TopicId::Addition, &problem.canonical_response())
        .await
        .unwrap();

    let progress = svc.progress(session).await.unwrap();
    assert_eq!(progress.len(), TopicId::ALL.len());
    let addition = progress
        .iter()
        .find(|p| p.topic == TopicId::Addition)
        .unwrap();
    assert_eq!((addition.answered, addition.correct), (1, 1));
    assert_eq!(addition.accuracy_percent(), Some(100));
}

#[tokio::test]
async fn unknown_session_is_a_storage_error() {
    let svc = loop_service(13);
    let err = svc
        .next_question(SessionId::new(404), TopicId::Addition)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PracticeError::Storage(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn same_seed_gives_same_questions() {
    let first = loop_service(42);
    let second = loop_service(42);
    let a = first.open_session().await.unwrap();
    let b = second.open_session().await.unwrap();

    for topic in [TopicId::BoxMultiplication, TopicId::OrderDecimals] {
        assert_eq!(
            first.next_question(a, topic).await.unwrap(),
            second.next_question(b, topic).await.unwrap()
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_to_one_session_are_all_kept() {
    let svc = loop_service(3);
    let session = svc.open_session().await.unwrap();

    let handles: Vec<_> = TopicId::ALL
        .iter()
        .map(|&topic| {
            let svc = svc.clone();
            tokio::spawn(async move { svc.next_question(session, topic).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for topic in TopicId::ALL {
        let state = svc.topic_state(session, topic).await.unwrap();
        assert!(
            state.phase().is_awaiting_answer(),
            "question for {topic:?} was lost"
        );
    }
}
