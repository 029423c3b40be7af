use super::*;

/// Expect the session to end
#[tokio::test]
async fn ends_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("ana", "Ana")
        .signed_in_as("ana")
        .build()?;

    let auth_service = AuthService::new(&test.backend);
    auth_service.sign_out().await.unwrap();

    assert_eq!(auth_service.current_user().await.unwrap(), None);

    Ok(())
}
