use dioxus::prelude::*;
use tracing::debug;

use crate::common::state::Theme;
use crate::components::icons::{MoonIcon, SunIcon};

#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    theme_signal: Signal<Theme>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let mut theme_signal = props.theme_signal;
    let theme = theme_signal();

    let toggle_theme = move |_| {
        theme_signal.write().toggle();
        debug!({theme = ?theme_signal()}, "toggled theme");
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{theme.toggle_label()}",
            onclick: toggle_theme,
            if theme.is_dark() {
                MoonIcon {}
            } else {
                SunIcon {}
            }
        }
    }
}
