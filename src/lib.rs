#![allow(non_snake_case)]

//! Kalendo, a community events calendar running in the browser.
//!
//! Events, comments and profiles live in a hosted backend; this crate renders them and
//! orchestrates the requests that read and write them.

pub mod client;
pub mod model;
