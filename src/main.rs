#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

use kalendo::client;

fn main() {
    let level = client::config::Config::from_env()
        .map(|config| config.log_level)
        .unwrap_or(Level::INFO);

    if let Err(err) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    dioxus::launch(client::App);
}
