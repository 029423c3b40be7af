mod detail;
mod search;
mod util;
