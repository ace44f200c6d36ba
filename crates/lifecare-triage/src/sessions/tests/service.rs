use std::sync::{Arc, Barrier};
use std::thread;

use chrono::{Duration, Utc};

use super::common::*;
use crate::config::SessionConfig;
use crate::dialogue::{Instruction, Mode, Step};
use crate::sessions::{
    ConversationService, InMemorySessionRepository, SessionError, SessionId, SessionRepository,
};

#[test]
fn start_registers_an_independent_conversation() {
    let (service, repository) = build_service(10);

    let first = service.start().expect("first conversation");
    let second = service.start().expect("second conversation");

    assert_ne!(first.conversation_id, second.conversation_id);
    assert_eq!(repository.len().expect("len"), 2);
    assert_eq!(first.step, Step::ModeSelect);
    assert!(!first.instructions.is_empty());

    service
        .submit(&first.conversation_id, "mode_triage", true)
        .expect("turn handled");

    let untouched = service
        .snapshot(&second.conversation_id)
        .expect("snapshot");
    assert_eq!(untouched.step, Step::ModeSelect);
}

#[test]
fn submit_drives_the_hosted_conversation() {
    let (service, _) = build_service(10);
    let id = service.start().expect("started").conversation_id;

    for (text, quick) in [
        ("mode_triage", true),
        ("adult", true),
        ("chest pain", false),
        ("yes", true),
    ] {
        service.submit(&id, text, quick).expect("turn handled");
    }
    let last = service.submit(&id, "low", true).expect("final turn");

    assert_eq!(last.mode, Mode::Information);
    assert_eq!(last.step, Step::FreeChat);
    assert!(last
        .instructions
        .iter()
        .any(|instruction| matches!(instruction, Instruction::SetSummaryDisplay { summary } if summary.risk_label == "Risk: High")));

    let snapshot = service.snapshot(&id).expect("snapshot");
    assert_eq!(snapshot.completed_triages, 1);
    assert_eq!(snapshot.summary.complaint, "chest pain");
}

#[test]
fn unknown_conversation_is_reported() {
    let (service, _) = build_service(10);

    let err = service
        .submit(&SessionId("conv-missing".to_string()), "hello", false)
        .expect_err("missing conversation");

    assert!(matches!(err, SessionError::NotFound(id) if id == "conv-missing"));
}

#[test]
fn capacity_is_enforced() {
    let (service, _) = build_service(1);
    service.start().expect("first fits");

    let err = service.start().expect_err("second rejected");

    assert!(matches!(err, SessionError::CapacityReached(1)));
}

#[test]
fn concurrent_starts_never_exceed_capacity() {
    const WORKERS: usize = 8;

    for _ in 0..50 {
        let (service, repository) = build_service(1);
        let barrier = Barrier::new(WORKERS);
        let (service, barrier) = (&service, &barrier);

        let accepted = thread::scope(|scope| {
            let handles: Vec<_> = (0..WORKERS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        service.start()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("worker finished"))
                .filter(Result::is_ok)
                .count()
        });

        assert_eq!(accepted, 1);
        assert_eq!(repository.len().expect("len"), 1);
    }
}

#[test]
fn oversized_idle_timeout_evicts_nothing() {
    let repository = Arc::new(InMemorySessionRepository::default());
    let service = ConversationService::new(
        repository.clone(),
        SessionConfig {
            max_sessions: 10,
            idle_timeout_minutes: 1_000_000_000_000,
        },
    );

    service.start().expect("first conversation");
    service.start().expect("second conversation");

    assert_eq!(service.evict_idle_at(Utc::now()).expect("eviction runs"), 0);
    assert_eq!(repository.len().expect("len"), 2);
}

#[test]
fn idle_conversations_are_evicted_before_capacity_check() {
    let (service, repository) = build_service(1);
    let earlier = Utc::now() - Duration::minutes(45);
    service.start_at(earlier).expect("stale conversation");

    service.start_at(Utc::now()).expect("stale one evicted");

    assert_eq!(repository.len().expect("len"), 1);
}

#[test]
fn blank_turns_do_not_refresh_activity() {
    let (service, repository) = build_service(5);
    let opened = Utc::now() - Duration::minutes(20);
    let id = service.start_at(opened).expect("started").conversation_id;

    service
        .submit_at(&id, "   ", false, Utc::now())
        .expect("blank accepted");
    let evicted = service
        .evict_idle_at(opened + Duration::minutes(31))
        .expect("eviction runs");

    assert_eq!(evicted, 1);
    assert_eq!(repository.len().expect("len"), 0);
}

#[test]
fn close_removes_the_conversation() {
    let (service, _) = build_service(5);
    let id = service.start().expect("started").conversation_id;

    service.close(&id).expect("closed");

    assert!(matches!(
        service.snapshot(&id),
        Err(SessionError::NotFound(_))
    ));
}
