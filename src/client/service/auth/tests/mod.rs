mod sign_in;
mod sign_out;

use kalendo_test_utils::{constant::TEST_PASSWORD, prelude::*};

use super::*;
