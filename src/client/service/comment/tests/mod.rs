mod post_comment_as_current_user;

use kalendo_test_utils::prelude::*;

use super::*;
