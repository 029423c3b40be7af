pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod routes;
pub mod service;
pub mod store;
pub mod supabase;
pub mod util;
pub mod view;

pub use app::App;
