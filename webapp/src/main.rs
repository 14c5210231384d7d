#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBarLayout;

mod home;
use home::Home;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBarLayout)]
        #[route("/")]
        Home {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(common::config::read_config);

    rsx! {
        style { "{common::style::NAVBAR_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
