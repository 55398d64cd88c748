//! Terminal styles.
//!
//! Rendering code asks for styles by what the text *is* (a title, a time, a
//! tag), never by color. The palette lives here so it can change in one place.
//! `console` drops the escapes when stdout is not a terminal.

use console::Style;

pub struct Theme {
    pub title: Style,
    pub id: Style,
    pub time: Style,
    pub tag: Style,
    pub favorite: Style,
    pub muted: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().bold(),
            id: Style::new().dim(),
            time: Style::new().dim(),
            tag: Style::new().cyan(),
            favorite: Style::new().yellow(),
            muted: Style::new().dim(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }
}

pub const FAVORITE_ICON: &str = "★";
pub const PLAIN_ICON: &str = " ";
