use entity::backend::StoreError;

use super::*;

fn owned_event() -> event::Model {
    event::Model {
        user_id: Some("ana".to_string()),
        ..factory::event(1, "Concert", factory::date(2025, 6, 5))
    }
}

/// Expect the event with its owner's display name
#[tokio::test]
async fn returns_event_with_author_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("ana", "Ana")
        .with_event(owned_event())
        .build()?;

    let event_service = EventService::new(&test.backend);
    let detail = event_service.fetch_event_detail(1).await.unwrap();

    assert_eq!(detail.event, owned_event());
    assert_eq!(detail.author_name.as_deref(), Some("Ana"));

    Ok(())
}

/// Expect NotFound for an id with no event
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::event(1, "Concert", factory::date(2025, 6, 5)))
        .build()?;

    let event_service = EventService::new(&test.backend);
    let result = event_service.fetch_event_detail(2).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect no author name, not an error, when the owner lookup fails
#[tokio::test]
async fn degrades_when_author_lookup_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(owned_event())
        .with_failing_table("users", StoreError::Transport("offline".to_string()))
        .build()?;

    let event_service = EventService::new(&test.backend);
    let detail = event_service.fetch_event_detail(1).await.unwrap();

    assert_eq!(detail.author_name, None);

    Ok(())
}

/// Expect no profile request for an event without owner
#[tokio::test]
async fn skips_author_lookup_without_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::event(1, "Concert", factory::date(2025, 6, 5)))
        .build()?;

    let event_service = EventService::new(&test.backend);
    event_service.fetch_event_detail(1).await.unwrap();

    assert!(test.store().requests().iter().all(|request| request.table() == event::TABLE));

    Ok(())
}

/// Expect identical values from two fetches with no write in between
#[tokio::test]
async fn repeated_fetches_are_identical() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("ana", "Ana")
        .with_event(owned_event())
        .build()?;

    let event_service = EventService::new(&test.backend);
    let first = event_service.fetch_event_detail(1).await.unwrap();
    let second = event_service.fetch_event_detail(1).await.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Expect Transport error when the events table is unavailable
#[tokio::test]
async fn fails_when_store_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_table(event::TABLE, StoreError::Transport("offline".to_string()))
        .build()?;

    let event_service = EventService::new(&test.backend);
    let result = event_service.fetch_event_detail(1).await;

    assert_eq!(
        result,
        Err(Error::Transport(StoreError::Transport("offline".to_string())))
    );

    Ok(())
}
