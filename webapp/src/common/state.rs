use crate::common::config::NavbarConfig;

// focus state of the search field
//
// the placeholder and the shortcut hint are only shown while the field is idle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusTracker {
    focused: bool,
}

impl FocusTracker {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn placeholder(&self) -> &'static str {
        if self.focused { "" } else { "Search..." }
    }

    pub fn shows_hint(&self) -> bool {
        !self.focused
    }

    pub fn input_class(&self) -> &'static str {
        if self.focused {
            "search-input focused"
        } else {
            "search-input idle"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    // every themed element hangs off this class, see style/navbar.rs
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    pub fn underline_color(self) -> &'static str {
        match self {
            Self::Light => "black",
            Self::Dark => "white",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Visibility of the bar, derived from the vertical scroll offset alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Resting,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64, config: &NavbarConfig) -> Self {
        if offset > config.scroll_threshold {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    pub fn translate_y(self, config: &NavbarConfig) -> f64 {
        match self {
            Self::Resting => 0.0,
            Self::Scrolled => config.hidden_offset,
        }
    }

    pub fn bar_style(self, config: &NavbarConfig) -> String {
        format!(
            "transform: translateY({}px); transition: transform {}ms ease-out;",
            self.translate_y(config),
            config.transition_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_follows_last_event() {
        let sequences: [&[bool]; 5] = [
            &[],
            &[true],
            &[true, false],
            &[false, false, true],
            &[true, true, false, true, false],
        ];

        for events in sequences {
            let mut tracker = FocusTracker::default();
            for &focus in events {
                if focus { tracker.focus() } else { tracker.blur() }
            }

            let expected = events.last().copied().unwrap_or(false);
            assert_eq!(tracker.is_focused(), expected, "events {events:?}");
            assert_eq!(tracker.shows_hint(), !expected);
            assert_eq!(tracker.placeholder().is_empty(), expected);
        }
    }

    #[test]
    fn focus_styling() {
        let mut tracker = FocusTracker::default();
        assert_eq!(tracker.placeholder(), "Search...");
        assert_eq!(tracker.input_class(), "search-input idle");

        tracker.focus();
        tracker.focus();
        assert_eq!(tracker.placeholder(), "");
        assert_eq!(tracker.input_class(), "search-input focused");
    }

    #[test]
    fn theme_double_toggle_round_trips() {
        for start in [Theme::Light, Theme::Dark] {
            let mut theme = start;
            theme.toggle();
            assert_ne!(theme, start);
            theme.toggle();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn theme_selection_is_pure() {
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::Light.css_class(), "theme-light");
        assert_eq!(Theme::Dark.css_class(), "theme-dark");
        assert_eq!(Theme::Light.underline_color(), "black");
        assert_eq!(Theme::Dark.underline_color(), "white");
        assert_eq!(Theme::Dark.css_class(), Theme::Light.toggled().css_class());
    }

    #[test]
    fn scroll_threshold_boundary() {
        let config = NavbarConfig::default();

        assert_eq!(ScrollState::from_offset(0.0, &config), ScrollState::Resting);
        assert_eq!(ScrollState::from_offset(50.0, &config), ScrollState::Resting);
        assert_eq!(ScrollState::from_offset(50.5, &config), ScrollState::Scrolled);
        assert_eq!(ScrollState::from_offset(51.0, &config), ScrollState::Scrolled);
        assert_eq!(ScrollState::from_offset(4000.0, &config), ScrollState::Scrolled);
        // overscroll on some browsers reports negative offsets
        assert_eq!(ScrollState::from_offset(-12.0, &config), ScrollState::Resting);
    }

    #[test]
    fn scroll_down_and_back() {
        let config = NavbarConfig::default();

        let state = ScrollState::default();
        assert_eq!(state.translate_y(&config), 0.0);

        let state = ScrollState::from_offset(100.0, &config);
        assert_eq!(state, ScrollState::Scrolled);
        assert_eq!(state.translate_y(&config), -60.0);

        let state = ScrollState::from_offset(0.0, &config);
        assert_eq!(state, ScrollState::Resting);
        assert_eq!(state.translate_y(&config), 0.0);
    }

    #[test]
    fn custom_threshold() {
        let config = NavbarConfig {
            scroll_threshold: 120.0,
            hidden_offset: -80.0,
            ..Default::default()
        };

        assert_eq!(ScrollState::from_offset(100.0, &config), ScrollState::Resting);
        assert_eq!(ScrollState::Scrolled.translate_y(&config), -80.0);
        assert_eq!(
            ScrollState::Scrolled.bar_style(&config),
            "transform: translateY(-80px); transition: transform 300ms ease-out;"
        );
    }
}
