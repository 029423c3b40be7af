use kalendo::client::{
    controller::detail::{load_detail, submit_comment, DetailController, SubmitResult},
    error::Error,
    service::{CommentService, EventService},
    store::toast::NoticeLevel,
};
use kalendo_test_utils::prelude::*;

use super::concert_scenario;

/// Expect a posted comment to appear first and the input to be cleared
#[tokio::test]
async fn posted_comment_is_listed_first() -> Result<(), TestError> {
    let test = concert_scenario().signed_in_as("ana").build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 1).await;
    controller.complete_open(ticket, loaded);

    controller.update_draft("  ¡Qué ganas!  ".to_string());
    let ticket = controller
        .request_submit(Some(&factory::auth_user("ana")))
        .expect("valid draft")
        .expect("nothing else in flight");
    let result = submit_comment(&test.backend, &ticket).await;
    let notice = controller.complete_submit(ticket, result);

    assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Success));
    let open = controller.open_detail().expect("detail stays open");
    assert_eq!(open.draft, "");
    assert_eq!(open.comments.len(), 2);
    assert_eq!(open.comments[0].comment.body, "¡Qué ganas!");
    assert_eq!(open.comments[1].comment.body, "Great!");

    Ok(())
}

/// Expect a whitespace-only comment to be rejected without any request
#[tokio::test]
async fn blank_comment_sends_nothing() -> Result<(), TestError> {
    let test = concert_scenario().signed_in_as("ana").build()?;

    let result = CommentService::new(&test.backend)
        .post_comment(1, Some(&factory::auth_user("ana")), " \n\t ")
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(test.store().requests().is_empty());

    Ok(())
}

/// Expect an anonymous submission to require a session and keep the draft
#[tokio::test]
async fn anonymous_submission_requires_session() -> Result<(), TestError> {
    let test = concert_scenario().build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 1).await;
    controller.complete_open(ticket, loaded);
    controller.update_draft("Hola".to_string());

    let result = controller.request_submit(None);

    assert!(matches!(result, Err(Error::AuthRequired)));
    assert_eq!(controller.open_detail().map(|o| o.draft.as_str()), Some("Hola"));

    Ok(())
}

/// Expect a rejected post to keep the draft and report the failure
#[tokio::test]
async fn failed_post_keeps_draft() -> Result<(), TestError> {
    let test = concert_scenario().signed_in_as("ana").build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 1).await;
    controller.complete_open(ticket, loaded);
    controller.update_draft("Hola".to_string());

    let ticket = controller
        .request_submit(Some(&factory::auth_user("ana")))
        .expect("valid draft")
        .expect("nothing else in flight");
    let result = SubmitResult::Failed(Error::Transport(entity::backend::StoreError::Transport(
        "offline".to_string(),
    )));
    let notice = controller.complete_submit(ticket, result);

    assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Error));
    assert_eq!(controller.open_detail().map(|o| o.draft.as_str()), Some("Hola"));

    Ok(())
}

/// Expect repeated detail fetches without writes to return identical values
#[tokio::test]
async fn detail_reads_are_stable() -> Result<(), TestError> {
    let test = concert_scenario().build()?;
    let service = EventService::new(&test.backend);

    let first = service.fetch_event_detail(1).await.unwrap();
    let second = service.fetch_event_detail(1).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.author_name.as_deref(), Some("Luis"));

    Ok(())
}
