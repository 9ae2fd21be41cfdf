//! Integration tests for the application session state machine.

mod common;

use common::*;

#[tokio::test]
async fn test_successful_submission() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying(SIX_PAGE_REPLY);
    let mut session = Session::new();

    assert!(session.submit_outline(&generator, "a fox", &instant_options()).await);

    assert!(!session.is_loading());
    assert_eq!(session.progress(), LoadingProgress::default());
    assert!(session.error().is_none());
    let story = session.story().expect("story is ready");
    assert_eq!(story.len(), 6);

    Ok(())
}

#[tokio::test]
async fn test_failed_submission_cleans_up() {
    let generator = ScriptedGenerator::replying("   ");
    let mut session = Session::new();

    assert!(session.submit_outline(&generator, "a fox", &instant_options()).await);

    assert!(!session.is_loading());
    assert_eq!(session.progress(), LoadingProgress::default());
    assert!(session.story().is_none());
    assert_eq!(
        session.error(),
        Some("Failed to generate story: Failed to generate story text")
    );
}

#[tokio::test]
async fn test_progress_visible_while_loading() {
    let generator = ScriptedGenerator::replying("one\n\ntwo");
    let mut session = Session::new();
    let mut observed = Vec::new();

    session
        .submit_outline_with(&generator, "count", &instant_options(), |p| observed.push(p))
        .await;

    assert_eq!(
        observed,
        vec![
            LoadingProgress::new(0, 2),
            LoadingProgress::new(1, 2),
            LoadingProgress::new(2, 2),
        ]
    );
    assert!(matches!(session.state(), AppState::Ready(_)));
}

#[tokio::test]
async fn test_submission_rejected_while_loading() {
    let generator = ScriptedGenerator::replying(SIX_PAGE_REPLY);
    let mut session = Session::new();
    assert!(session.begin());

    assert!(!session.submit_outline(&generator, "second", &instant_options()).await);
    assert_eq!(generator.calls(), 0);
    assert!(session.is_loading());
}

#[tokio::test]
async fn test_reset_returns_to_outline_entry() {
    let generator = ScriptedGenerator::replying(SIX_PAGE_REPLY);
    let mut session = Session::new();
    session.submit_outline(&generator, "a fox", &instant_options()).await;
    assert!(session.story().is_some());

    session.reset();
    assert_eq!(session.state(), &AppState::Idle);

    let failing = ScriptedGenerator::failing(GenerationError::MissingApiKey);
    session.submit_outline(&failing, "a fox", &instant_options()).await;
    assert!(session.error().is_some());

    session.reset();
    assert_eq!(session.state(), &AppState::Idle);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_new_outline_replaces_story() {
    let mut session = Session::new();
    session
        .submit_outline(&ScriptedGenerator::replying("first"), "a", &instant_options())
        .await;
    let first = session.story().cloned().expect("first story");

    session
        .submit_outline(&ScriptedGenerator::replying("second\n\nthird"), "b", &instant_options())
        .await;
    let second = session.story().cloned().expect("second story");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(first.pages()[0].text(), "first");
}
