use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_events::EventListenerOptions;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::Route;
use crate::common::config::{NavbarConfig, Shortcut};
use crate::common::listener::{capture_options, scroll_offset, use_window_listener};
use crate::common::state::{ScrollState, Theme};
use crate::components::icons::MenuIcon;
use crate::components::search_bar::{SearchBar, SearchInputRef};
use crate::components::theme_toggle::ThemeToggle;

#[derive(Clone, PartialEq, Props)]
struct BrandProps {
    name: String,
    href: String,
    theme: Theme,
}

// a plain anchor so the bar does not need a router above it
#[component]
fn Brand(props: BrandProps) -> Element {
    let underline = props.theme.underline_color();

    rsx! {
        a { class: "brand", href: "{props.href}",
            span { class: "brand-name", "{props.name}" }
            div {
                class: "brand-underline",
                style: "background-color: {underline};",
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct LoginButtonProps {
    on_login: Option<EventHandler<MouseEvent>>,
}

#[component]
fn LoginButton(props: LoginButtonProps) -> Element {
    let on_login = props.on_login;

    rsx! {
        button {
            class: "login-button",
            r#type: "button",
            onclick: move |evt| {
                match on_login {
                    Some(handler) => handler.call(evt),
                    None => debug!("login clicked with no handler attached"),
                }
            },
            "Login"
        }
    }
}

#[component]
fn MobileMenu() -> Element {
    rsx! {
        div { class: "mobile-menu", MenuIcon {} }
    }
}

// moves focus to the search field when the key press is the shortcut,
// returning whether the press was consumed
//
// a consumed press must not reach the browser's own ctrl+k handling, even
// when there is no search field to focus
pub fn on_shortcut_key(
    shortcut: &Shortcut,
    ctrl: bool,
    key: &str,
    search: &SearchInputRef,
) -> bool {
    if !shortcut.matches(ctrl, key) {
        return false;
    }

    debug!({mounted = search.is_mounted()}, "search shortcut pressed");
    search.focus();
    true
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    // read once when the bar mounts, the window listeners and the scroll
    // memo keep the first value for the lifetime of the component
    #[props(default)]
    config: NavbarConfig,
    #[props(default = String::from("RateMyProf"))]
    brand: String,
    #[props(default = String::from("/"))]
    brand_href: String,
    #[props(default)]
    on_login: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let config = props.config;

    let theme_signal = use_signal(Theme::default);
    let search_ref = use_hook(SearchInputRef::default);

    let shortcut = config.shortcut.clone();
    let shortcut_ref = search_ref.clone();
    use_window_listener("keydown", capture_options(), move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        if on_shortcut_key(&shortcut, event.ctrl_key(), &event.key(), &shortcut_ref) {
            event.prevent_default();
        }
    });

    // only the offset is stored; the memo re-renders the bar when the derived
    // state flips, not on every scroll event
    let mut offset_signal = use_signal(|| 0.0_f64);
    use_window_listener("scroll", EventListenerOptions::default(), move |_| {
        match scroll_offset() {
            Ok(offset) => offset_signal.set(offset),
            Err(err) => error!("{err}"),
        }
    });

    let memo_config = config.clone();
    let scroll_state = use_memo(move || ScrollState::from_offset(offset_signal(), &memo_config));

    let theme = theme_signal();
    let bar_style = scroll_state().bar_style(&config);
    let hint = config.shortcut.label();

    rsx! {
        div {
            class: "navbar {theme.css_class()}",
            style: "{bar_style}",
            div { class: "navbar-container",
                Brand { name: props.brand, href: props.brand_href, theme }

                div { class: "navbar-actions",
                    SearchBar { search_ref, hint }
                    LoginButton { on_login: props.on_login }
                    ThemeToggle { theme_signal }
                }

                MobileMenu {}
            }
        }
    }
}

// router layout, the config comes from the App context
#[component]
pub fn NavBarLayout() -> Element {
    let config = use_context::<NavbarConfig>();
    let home = Route::Home {}.to_string();

    rsx! {
        NavBar { config, brand_href: home }
        Outlet::<Route> {}
    }
}
