
use kalendo_test_utils::prelude::*;

use super::*;
