use serde::Deserialize;
use tracing::{debug, warn};

// compiled into the wasm bundle, there is no filesystem to read at runtime
const EMBEDDED_CONFIG: &str = include_str!("../../navbar.toml");

// navigation bar configuration
//
// these are presentation constants, so every field falls back to its default
// when missing from the document
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavbarConfig {
    // vertical scroll offset above which the bar slides away
    pub scroll_threshold: f64,
    // translateY applied to the bar once scrolled, in px
    pub hidden_offset: f64,
    pub transition_ms: u32,
    pub shortcut: Shortcut,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            hidden_offset: -60.0,
            transition_ms: 300,
            shortcut: Shortcut::default(),
        }
    }
}

/// Key combination that moves focus to the search field.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Shortcut {
    pub ctrl: bool,
    pub key: String,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            ctrl: true,
            key: String::from("k"),
        }
    }
}

impl Shortcut {
    // KeyboardEvent.key is case sensitive, so ctrl+shift+k does not match
    pub fn matches(&self, ctrl: bool, key: &str) -> bool {
        (ctrl || !self.ctrl) && key == self.key
    }

    pub fn label(&self) -> String {
        let key = self.key.to_uppercase();
        if self.ctrl {
            format!("Ctrl {key}")
        } else {
            key
        }
    }
}

// the settings live in a [navbar] table so the file can grow other sections
#[derive(Debug, Default, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    navbar: NavbarConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<NavbarConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;
    let config = data.navbar;

    if !config.scroll_threshold.is_finite() || !config.hidden_offset.is_finite() {
        return Err(anyhow::Error::msg("navbar offsets must be finite numbers"));
    }

    if config.shortcut.key.is_empty() {
        return Err(anyhow::Error::msg("navbar shortcut key must not be empty"));
    }

    Ok(config)
}

pub fn read_config() -> NavbarConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            debug!({config = ?config}, "loaded navbar config");
            config
        }
        Err(err) => {
            warn!("failed to parse navbar config, using defaults: {err}");
            NavbarConfig::default()
        }
    }
}
