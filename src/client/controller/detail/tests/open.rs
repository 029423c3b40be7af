use entity::backend::StoreError;

use super::*;

/// Expect Loading then Open on success, with the trigger pending only while loading
#[test]
fn opens_after_successful_load() {
    let mut controller = DetailController::new();

    let ticket = controller.request_open(1).unwrap();
    assert_eq!(controller.state(), &DetailState::Loading { event_id: 1 });
    assert!(controller.is_pending(1));

    let notice = controller.complete_open(ticket, Ok((concert_detail(), Vec::new())));

    assert_eq!(notice, None);
    assert!(!controller.is_pending(1));
    assert_eq!(controller.open_detail().map(|o| o.detail.event.id), Some(1));
}

/// Expect a repeated open of an event that is loading to be ignored
#[test]
fn ignores_repeated_open_while_loading() {
    let mut controller = DetailController::new();

    assert!(controller.request_open(1).is_some());
    assert!(controller.request_open(1).is_none());
}

/// Expect Closed and an error notice when loading fails
#[test]
fn closes_with_notice_on_failure() {
    let mut controller = DetailController::new();
    let ticket = controller.request_open(9).unwrap();

    let notice = controller.complete_open(ticket, Err(Error::NotFound("el evento 9".to_string())));

    assert_eq!(controller.state(), &DetailState::Closed);
    assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Error));
}

/// Expect a superseded response to be discarded
#[test]
fn discards_superseded_response() {
    let mut controller = DetailController::new();
    let first = controller.request_open(1).unwrap();
    let second = controller.request_open(2).unwrap();

    let stale = controller.complete_open(
        first,
        Err(Error::Transport(StoreError::Transport("offline".to_string()))),
    );

    assert_eq!(stale, None);
    assert_eq!(controller.state(), &DetailState::Loading { event_id: 2 });
    assert!(!controller.is_pending(1));

    let mut detail = concert_detail();
    detail.event.id = 2;
    controller.complete_open(second, Ok((detail, Vec::new())));
    assert_eq!(controller.open_detail().map(|o| o.detail.event.id), Some(2));
}

/// Expect a response arriving after dismissal to be discarded
#[test]
fn discards_response_after_dismiss() {
    let mut controller = DetailController::new();
    let ticket = controller.request_open(1).unwrap();

    controller.dismiss();
    let notice = controller.complete_open(ticket, Ok((concert_detail(), Vec::new())));

    assert_eq!(notice, None);
    assert_eq!(controller.state(), &DetailState::Closed);
    assert!(!controller.is_pending(1));
}

/// Expect a load that never completed to stop blocking the event once dismissed
#[test]
fn dismiss_releases_abandoned_load() {
    let mut controller = DetailController::new();
    let _abandoned = controller.request_open(1).unwrap();

    controller.dismiss();

    assert!(!controller.is_pending(1));
    assert!(controller.request_open(1).is_some());
    assert_eq!(controller.state(), &DetailState::Loading { event_id: 1 });
}

/// Expect a late response of an earlier request not to release a newer one
#[test]
fn late_response_keeps_newer_request_pending() {
    let mut controller = DetailController::new();
    let earlier = controller.request_open(1).unwrap();
    controller.dismiss();
    let newer = controller.request_open(1).unwrap();

    let notice = controller.complete_open(earlier, Ok((concert_detail(), Vec::new())));

    assert_eq!(notice, None);
    assert!(controller.is_pending(1));
    assert!(controller.request_open(1).is_none());

    controller.complete_open(newer, Ok((concert_detail(), Vec::new())));
    assert!(!controller.is_pending(1));
    assert_eq!(controller.open_detail().map(|o| o.detail.event.id), Some(1));
}
