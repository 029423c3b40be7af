mod comment_flow;
mod render;

use kalendo_test_utils::prelude::*;

fn concert_scenario() -> TestBuilder {
    let mut concert = factory::event(1, "Concert", factory::datetime(2025, 6, 5, 20, 0));
    concert.location = "Hall A".to_string();
    concert.description = "Música en directo".to_string();
    concert.user_id = Some("luis".to_string());

    TestBuilder::new()
        .with_user("ana", "Ana")
        .with_user("luis", "Luis")
        .with_event(concert)
        .with_comment(factory::comment(
            1,
            1,
            Some("ana"),
            "Great!",
            factory::datetime(2025, 6, 2, 9, 15),
        ))
}
