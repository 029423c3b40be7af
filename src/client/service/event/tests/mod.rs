mod fetch_event_detail;
mod search_events;

use kalendo_test_utils::prelude::*;

use super::*;
