use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    #[props(default = String::from("icon"))]
    class: String,
}

#[component]
pub fn MenuIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M4 6h16M4 12h16M4 18h16",
            }
        }
    }
}

#[component]
pub fn SearchIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M21 21l-4.35-4.35M10.5 18a7.5 7.5 0 1 1 0-15 7.5 7.5 0 0 1 0 15z",
            }
        }
    }
}

#[component]
pub fn MoonIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z",
            }
        }
    }
}

#[component]
pub fn SunIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            circle { cx: "12", cy: "12", r: "4", stroke_width: "2" }
            path {
                stroke_linecap: "round",
                stroke_width: "2",
                d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41",
            }
        }
    }
}
