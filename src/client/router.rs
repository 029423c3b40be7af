use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Calendar, Events, Home, Login, NotFound, Profile},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/events")]
    Events {},

    #[route("/calendar")]
    Calendar {},

    #[route("/login")]
    Login {},

    #[route("/profile")]
    Profile {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
