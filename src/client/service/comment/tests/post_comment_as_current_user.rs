use super::*;

/// Expect the comment to be authored by the signed-in user
#[tokio::test]
async fn posts_as_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("ana", "Ana")
        .signed_in_as("ana")
        .build()?;

    let comment_service = CommentService::new(&test.backend);
    let stored = comment_service
        .post_comment_as_current_user(1, "Great!")
        .await
        .unwrap();

    assert_eq!(stored.user_id.as_deref(), Some("ana"));

    Ok(())
}

/// Expect AuthRequired without a session and no insert
#[tokio::test]
async fn requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("ana", "Ana").build()?;

    let comment_service = CommentService::new(&test.backend);
    let result = comment_service.post_comment_as_current_user(1, "Great!").await;

    assert_eq!(result, Err(Error::AuthRequired));
    assert!(test.store().requests().is_empty());

    Ok(())
}

/// Expect the body to be validated before the session is looked up
#[tokio::test]
async fn validates_before_session_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let comment_service = CommentService::new(&test.backend);
    let result = comment_service.post_comment_as_current_user(1, "   ").await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(test.auth().calls(), 0);

    Ok(())
}
