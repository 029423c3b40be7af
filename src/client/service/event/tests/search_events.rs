use chrono::NaiveDate;

use super::*;

fn events() -> Vec<event::Model> {
    vec![
        event::Model {
            location: "Hall A".to_string(),
            ..factory::event(1, "Jazz Night", factory::datetime(2025, 6, 5, 21, 0))
        },
        event::Model {
            location: "Parque Central".to_string(),
            ..factory::event(2, "Rock Show", factory::datetime(2025, 6, 5, 20, 0))
        },
        event::Model {
            description: "Una noche de JAZZ al aire libre".to_string(),
            location: "Parque Central".to_string(),
            ..factory::event(3, "Open Air", factory::date(2025, 6, 6))
        },
    ]
}

fn titles(events: &[event::Model]) -> Vec<&str> {
    events.iter().map(|e| e.title.as_str()).collect()
}

/// Expect a search for "jazz" over "Jazz Night" and "Rock Show" to return only "Jazz Night"
#[tokio::test]
async fn matches_title_case_insensitively() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_events(events().into_iter().take(2))
        .build()?;

    let event_service = EventService::new(&test.backend);
    let found = event_service
        .search_events(&EventFilters::search("jazz"))
        .await
        .unwrap();

    assert_eq!(titles(&found), vec!["Jazz Night"]);

    Ok(())
}

/// Expect the free-text term to match descriptions too
#[tokio::test]
async fn matches_description() -> Result<(), TestError> {
    let test = TestBuilder::new().with_events(events()).build()?;

    let event_service = EventService::new(&test.backend);
    let found = event_service
        .search_events(&EventFilters::search("jazz"))
        .await
        .unwrap();

    assert_eq!(titles(&found), vec!["Jazz Night", "Open Air"]);

    Ok(())
}

/// Expect filters to combine conjunctively
#[tokio::test]
async fn combines_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_events(events()).build()?;

    let filters = EventFilters {
        search: None,
        date: NaiveDate::from_ymd_opt(2025, 6, 5),
        location: Some("parque".to_string()),
    };
    let event_service = EventService::new(&test.backend);
    let found = event_service.search_events(&filters).await.unwrap();

    assert_eq!(titles(&found), vec!["Rock Show"]);

    Ok(())
}

/// Expect the date filter to cover the whole calendar day, soonest first
#[tokio::test]
async fn date_matches_whole_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_events(events()).build()?;

    let filters = EventFilters {
        date: NaiveDate::from_ymd_opt(2025, 6, 5),
        ..Default::default()
    };
    let event_service = EventService::new(&test.backend);
    let found = event_service.search_events(&filters).await.unwrap();

    assert_eq!(titles(&found), vec!["Rock Show", "Jazz Night"]);

    Ok(())
}

/// Expect blank options to impose no constraint
#[tokio::test]
async fn blank_filters_return_everything() -> Result<(), TestError> {
    let test = TestBuilder::new().with_events(events()).build()?;

    let filters = EventFilters {
        search: Some("  ".to_string()),
        date: None,
        location: Some("".to_string()),
    };
    let event_service = EventService::new(&test.backend);
    let found = event_service.search_events(&filters).await.unwrap();

    assert_eq!(found.len(), 3);
    match &test.store().requests()[0] {
        StoreRequest::Select(select) => assert!(select.filters.is_empty()),
        other => panic!("expected a select, got {:?}", other),
    }

    Ok(())
}

/// Expect the date filter to follow the day boundaries of the service's zone
#[tokio::test]
async fn date_follows_service_zone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_events(events()).build()?;

    let filters = EventFilters {
        date: NaiveDate::from_ymd_opt(2025, 6, 5),
        ..Default::default()
    };
    let west = DisplayZone::Fixed(chrono::FixedOffset::west_opt(3 * 3600).unwrap());
    let event_service = EventService::new(&test.backend).in_zone(west);
    let found = event_service.search_events(&filters).await.unwrap();

    assert_eq!(titles(&found), vec!["Rock Show", "Jazz Night", "Open Air"]);

    Ok(())
}
