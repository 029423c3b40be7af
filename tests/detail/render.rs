use kalendo::client::controller::{
    detail::{load_detail, DetailController},
    DetailState,
};
use kalendo_test_utils::prelude::*;

use super::concert_scenario;
use crate::util::{position, render_detail, renderer, PLACEHOLDER};

/// Expect the opened detail to render title, date, location, description and comments in order
#[tokio::test]
async fn renders_opened_event_in_order() -> Result<(), TestError> {
    let test = concert_scenario().build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 1).await;
    assert_eq!(controller.complete_open(ticket, loaded), None);

    let open = controller.open_detail().expect("detail is open");
    let view = renderer().render_event_detail(&open.detail, &open.comments);
    let html = render_detail(view);

    let title = position(&html, "Concert");
    let date = position(&html, "jueves, 5 de junio de 2025");
    let location = position(&html, "Hall A");
    let description = position(&html, "Música en directo");
    let author = position(&html, "Ana");
    let body = position(&html, "Great!");

    assert!(title < date && date < location && location < description);
    assert!(description < author && author < body);
    assert!(html.contains("Luis"));
    assert!(html.contains(PLACEHOLDER));

    Ok(())
}

/// Expect an event without comments to render the empty state and no comment entries
#[tokio::test]
async fn renders_event_without_comments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::event(2, "Rock Show", factory::date(2025, 7, 1)))
        .build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(2).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 2).await;
    controller.complete_open(ticket, loaded);

    let open = controller.open_detail().expect("detail is open");
    assert!(open.comments.is_empty());

    let html = render_detail(renderer().render_event_detail(&open.detail, &open.comments));
    assert!(html.contains("Todavía no hay comentarios"));
    assert!(!html.contains("class=\"comment "));

    Ok(())
}

/// Expect opening a missing event to close the view and report an error
#[tokio::test]
async fn reports_missing_event() -> Result<(), TestError> {
    let test = concert_scenario().build()?;
    let mut controller = DetailController::new();

    let ticket = controller.request_open(99).expect("first open is accepted");
    let loaded = load_detail(&test.backend, 99).await;
    let notice = controller.complete_open(ticket, loaded);

    assert!(notice.is_some());
    assert_eq!(controller.state(), &DetailState::Closed);

    Ok(())
}
