use constcat::concat;

mod home;
mod navbar;
mod variables;

pub use home::HOME_STYLES;
pub use navbar::NAVBAR_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const NAVBAR_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    NAVBAR_COMPONENTS
);
