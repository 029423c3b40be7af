use super::*;

fn scenario() -> TestBuilder {
    TestBuilder::new()
        .with_user("ana", "Ana")
        .with_event(factory::event(1, "Concert", factory::date(2025, 6, 5)))
        .signed_in_as("ana")
}

/// Expect open, submit and reload to leave the new comment first and the input empty
#[tokio::test]
async fn posts_comment_and_reloads() -> Result<(), TestError> {
    let test = scenario()
        .with_comment(factory::comment(1, 1, Some("ana"), "Anterior", factory::date(2025, 6, 1)))
        .build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).unwrap();
    let loaded = load_detail(&test.backend, 1).await;
    assert_eq!(controller.complete_open(ticket, loaded), None);
    assert_eq!(controller.open_detail().unwrap().comments.len(), 1);

    controller.update_draft("Great!".to_string());
    let ticket = controller
        .request_submit(Some(&factory::auth_user("ana")))
        .unwrap()
        .unwrap();
    let result = submit_comment(&test.backend, &ticket).await;
    let notice = controller.complete_submit(ticket, result);

    let open = controller.open_detail().unwrap();
    assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Success));
    assert_eq!(open.draft, "");
    assert_eq!(open.comments.len(), 2);
    assert_eq!(open.comments[0].comment.body, "Great!");
    assert_eq!(open.comments[0].author_name(), Some("Ana"));

    Ok(())
}

/// Expect Failed without reload when the post is rejected
#[tokio::test]
async fn reports_failed_post() -> Result<(), TestError> {
    let test = scenario()
        .with_failing_table(
            "comments",
            entity::backend::StoreError::Transport("offline".to_string()),
        )
        .build()?;
    let ticket = {
        let mut controller = open_controller("Great!");
        controller
            .request_submit(Some(&factory::auth_user("ana")))
            .unwrap()
            .unwrap()
    };

    let result = submit_comment(&test.backend, &ticket).await;

    assert!(matches!(result, SubmitResult::Failed(Error::Transport(_))));
    assert_eq!(test.store().requests().len(), 1);

    Ok(())
}

/// Expect a missing event to fail the load with NotFound
#[tokio::test]
async fn load_fails_for_missing_event() -> Result<(), TestError> {
    let test = scenario().build()?;

    let result = load_detail(&test.backend, 42).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
