use entity::backend::StoreError;

use super::*;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect a session for valid credentials
#[tokio::test]
async fn signs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("ana", "Ana").build()?;

    let auth_service = AuthService::new(&test.backend);
    let user = auth_service
        .sign_in(&credentials(" ana@example.com ", TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(user, factory::auth_user("ana"));
    assert_eq!(auth_service.current_user().await.unwrap(), Some(user));

    Ok(())
}

/// Expect Validation without contacting the provider for blank fields
#[tokio::test]
async fn rejects_blank_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let auth_service = AuthService::new(&test.backend);
    let result = auth_service.sign_in(&credentials("  ", "secret")).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(test.auth().calls(), 0);

    Ok(())
}

/// Expect the provider's rejection for a wrong password
#[tokio::test]
async fn fails_with_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("ana", "Ana").build()?;

    let auth_service = AuthService::new(&test.backend);
    let result = auth_service
        .sign_in(&credentials("ana@example.com", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(Error::Transport(StoreError::Service { status: 400, .. }))
    ));
    assert_eq!(auth_service.current_user().await.unwrap(), None);

    Ok(())
}
