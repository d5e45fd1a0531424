use super::*;

/// Tests a questionnaire answered in full.
///
/// Verifies that the stored application holds the answers in question order with
/// `pending` status and a timestamp no earlier than the flow start.
///
/// Expected: Ok(Submitted) and one stored application
#[tokio::test]
async fn completed_intake_stores_pending_application() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);
    let started = Utc::now();

    let outcome = IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    let stored = ApplicationRepository::new(&store)
        .find(RESPONDENT)
        .await
        .expect("application stored");
    assert_eq!(outcome, IntakeOutcome::Submitted(stored.clone()));
    assert_eq!(stored.answers, vec!["Steve", "17", "because", "yes"]);
    assert_eq!(stored.status, ApplicationStatus::pending());
    assert!(stored.submitted_at >= started);
}

/// Tests the order of notices for a completed questionnaire.
///
/// Verifies the announcement, one prompt per question, then the success notice, all
/// in the invoking channel.
///
/// Expected: 1 + 4 + 1 notices
#[tokio::test]
async fn completed_intake_sends_prompts_in_order() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);

    IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    let sent = outbox.sent();
    assert_eq!(sent.len(), QUESTIONS.len() + 2);
    assert!(sent
        .iter()
        .all(|(destination, _)| *destination == Destination::Channel(CHANNEL)));

    assert_eq!(sent[0].1.title.as_deref(), Some("📝 Server Application"));
    for (index, question) in QUESTIONS.iter().enumerate() {
        assert_eq!(sent[index + 1].1.description.as_deref(), Some(*question));
    }
    let last = &sent.last().unwrap().1;
    assert_eq!(last.title.as_deref(), Some("✅ Application Submitted"));
    assert_eq!(last.tone, Tone::Success);
}

/// Tests that every wait targets the respondent and channel with a fresh deadline.
///
/// Expected: one wait per question, each with the full per-question timeout
#[tokio::test]
async fn each_question_waits_with_its_own_deadline() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);

    IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    let requests = replies.requests();
    assert_eq!(requests.len(), QUESTIONS.len());
    assert!(requests
        .iter()
        .all(|request| *request == (RESPONDENT, CHANNEL, QUESTION_TIMEOUT)));
}

/// Tests a missed deadline on the second question.
///
/// Verifies that nothing is stored, exactly one timeout notice is sent, and the
/// remaining questions are never asked.
///
/// Expected: Ok(TimedOut { question: 2 })
#[tokio::test]
async fn timeout_aborts_without_storing() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::new(vec![Some("Steve"), None, Some("because"), Some("yes")]);

    let outcome = IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    assert_eq!(outcome, IntakeOutcome::TimedOut { question: 2 });
    assert!(ApplicationRepository::new(&store)
        .find(RESPONDENT)
        .await
        .is_none());

    let descriptions = outbox.descriptions();
    assert!(!descriptions.contains(&Some(QUESTIONS[2].to_string())));
    assert!(!descriptions.contains(&Some(QUESTIONS[3].to_string())));

    let titles = outbox.titles();
    let timeouts = titles
        .iter()
        .filter(|title| title.as_deref() == Some("⏰ Timeout"))
        .count();
    assert_eq!(timeouts, 1);
    assert_eq!(titles.last().unwrap().as_deref(), Some("⏰ Timeout"));
    assert_eq!(replies.requests().len(), 2);
}

/// Tests that a timed-out retry leaves an earlier application untouched.
///
/// Expected: earlier record unchanged
#[tokio::test]
async fn timeout_keeps_previous_application() {
    let store = Store::new();
    let repo = ApplicationRepository::new(&store);
    let earlier = Application::submit(RESPONDENT, vec!["Alex".to_string()]);
    repo.upsert(earlier.clone()).await;

    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::new(vec![None]);
    let outcome = IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    assert_eq!(outcome, IntakeOutcome::TimedOut { question: 1 });
    assert_eq!(repo.find(RESPONDENT).await, Some(earlier));
}

/// Tests that a completed retry replaces the earlier application.
///
/// Expected: stored answers are the new ones
#[tokio::test]
async fn completed_retry_overwrites_previous_application() {
    let store = Store::new();
    let repo = ApplicationRepository::new(&store);
    let mut earlier = Application::submit(RESPONDENT, vec!["Alex".to_string()]);
    earlier.status = ApplicationStatus::new("rejected");
    repo.upsert(earlier).await;

    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);
    IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    let stored = repo.find(RESPONDENT).await.unwrap();
    assert_eq!(stored.answers[0], "Steve");
    assert_eq!(stored.status, ApplicationStatus::pending());
}

/// Tests that a second intake for a respondent with one running is rejected.
///
/// Expected: Err(IntakeInProgress), no notices, no waits
#[tokio::test]
async fn concurrent_intake_for_same_respondent_is_rejected() {
    let store = Store::new();
    let repo = ApplicationRepository::new(&store);
    assert!(repo.begin_intake(RESPONDENT).await);

    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["Steve"]);
    let result = IntakeFlow::new(&store, &outbox, &replies)
        .run(RESPONDENT, CHANNEL)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::IntakeInProgress))
    ));
    assert!(outbox.sent().is_empty());
    assert!(replies.requests().is_empty());
}

/// Tests that the in-progress marker is cleared on both outcomes.
///
/// Expected: respondent can start again after completion and after a timeout
#[tokio::test]
async fn intake_marker_cleared_after_flow_ends() {
    let store = Store::new();
    let repo = ApplicationRepository::new(&store);
    let outbox = RecordingOutbox::new();

    let timed_out = ScriptedReplies::new(vec![None]);
    IntakeFlow::new(&store, &outbox, &timed_out)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();
    assert!(!repo.intake_in_progress(RESPONDENT).await);

    let answered = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);
    IntakeFlow::new(&store, &outbox, &answered)
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();
    assert!(!repo.intake_in_progress(RESPONDENT).await);
}

/// Tests that intakes for different respondents do not interfere.
///
/// Expected: two independent applications
#[tokio::test]
async fn different_respondents_are_independent() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let other = UserId::new(3303);
    let first = ScriptedReplies::answering(&["Steve", "17", "because", "yes"]);
    let second = ScriptedReplies::answering(&["Alex", "19", "friends", "yes"]);

    let flow_a = IntakeFlow::new(&store, &outbox, &first);
    let flow_b = IntakeFlow::new(&store, &outbox, &second);

    let (a, b) = tokio::join!(
        flow_a.run(RESPONDENT, CHANNEL),
        flow_b.run(other, CHANNEL),
    );
    assert!(matches!(a.unwrap(), IntakeOutcome::Submitted(_)));
    assert!(matches!(b.unwrap(), IntakeOutcome::Submitted(_)));
    assert_eq!(first.requests().len(), QUESTIONS.len());
    assert_eq!(second.requests().len(), QUESTIONS.len());
    assert!(second
        .requests()
        .iter()
        .all(|(respondent, _, _)| *respondent == other));

    let repo = ApplicationRepository::new(&store);
    assert_eq!(repo.find(RESPONDENT).await.unwrap().answers[0], "Steve");
    assert_eq!(repo.find(other).await.unwrap().answers[0], "Alex");
}

/// Tests a custom question list and timeout.
///
/// Expected: announcement mentions the configured timeout; answers match list length
#[tokio::test]
async fn custom_questions_and_timeout() {
    let store = Store::new();
    let outbox = RecordingOutbox::new();
    let replies = ScriptedReplies::answering(&["blue"]);
    let questions = ["Favourite colour?"];

    let outcome = IntakeFlow::new(&store, &outbox, &replies)
        .with_questions(&questions, Duration::from_secs(5))
        .run(RESPONDENT, CHANNEL)
        .await
        .unwrap();

    match outcome {
        IntakeOutcome::Submitted(application) => assert_eq!(application.answers, vec!["blue"]),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        outbox.descriptions()[0].as_deref(),
        Some("Please answer the following questions within 5 seconds each.")
    );
    assert_eq!(replies.requests()[0].2, Duration::from_secs(5));
}
