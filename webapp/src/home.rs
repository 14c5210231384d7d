use dioxus::prelude::*;

// (title, body) pairs, long enough that the page scrolls well past the
// navbar threshold
const SECTIONS: [(&str, &str); 4] = [
    (
        "Find your professor",
        "Press Ctrl K anywhere on the page to jump to the search field.",
    ),
    (
        "Read reviews",
        "Scroll down and the navigation bar slides out of the way; scroll back to the top to bring it back.",
    ),
    (
        "Pick a theme",
        "The sun and moon button in the corner switches the bar between light and dark.",
    ),
    (
        "Share your experience",
        "Log in to leave a rating for the courses you have taken.",
    ),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            for (title, body) in SECTIONS {
                section { class: "home-section",
                    h2 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}
