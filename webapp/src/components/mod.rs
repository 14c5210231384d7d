pub mod icons;
pub mod navigation;
pub mod search_bar;
pub mod theme_toggle;
