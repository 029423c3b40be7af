use kalendo::{client::service::EventService, model::event::EventFilters};
use kalendo_test_utils::prelude::*;

fn listing() -> TestBuilder {
    let mut jazz = factory::event(1, "Jazz Night", factory::datetime(2025, 6, 5, 21, 0));
    jazz.location = "Café Central".to_string();
    let mut rock = factory::event(2, "Rock Show", factory::datetime(2025, 6, 7, 20, 0));
    rock.location = "Hall A".to_string();

    TestBuilder::new().with_events([jazz, rock])
}

/// Expect a text search to return only the matching event
#[tokio::test]
async fn finds_jazz_night() -> Result<(), TestError> {
    let test = listing().build()?;

    let found = EventService::new(&test.backend)
        .search_events(&EventFilters::search("jazz"))
        .await
        .unwrap();

    let titles: Vec<_> = found.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Jazz Night"]);

    Ok(())
}

/// Expect empty filters to list every event by ascending date
#[tokio::test]
async fn lists_everything_without_filters() -> Result<(), TestError> {
    let test = listing().build()?;

    let found = EventService::new(&test.backend)
        .search_events(&EventFilters::default())
        .await
        .unwrap();

    let ids: Vec<_> = found.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Expect the location filter to narrow the result
#[tokio::test]
async fn filters_by_location() -> Result<(), TestError> {
    let test = listing().build()?;

    let found = EventService::new(&test.backend)
        .search_events(&EventFilters {
            location: Some("hall".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: Vec<_> = found.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);

    Ok(())
}
