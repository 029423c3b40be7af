mod flow;
mod open;

use kalendo_test_utils::prelude::*;

use super::*;
use crate::client::store::toast::NoticeLevel;

fn concert_detail() -> EventDetail {
    EventDetail {
        event: factory::event(1, "Concert", factory::date(2025, 6, 5)),
        author_name: None,
    }
}

/// A controller with event 1 open and `draft` typed.
fn open_controller(draft: &str) -> DetailController {
    let mut controller = DetailController::new();
    let ticket = controller.request_open(1).unwrap();
    controller.complete_open(ticket, Ok((concert_detail(), Vec::new())));
    controller.update_draft(draft.to_string());
    controller
}
