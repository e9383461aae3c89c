use serde::{Deserialize, Serialize};

/// Glyph set used by every layout. Each field holds a single terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub rounded_top_left: String,
    pub rounded_top_right: String,
    pub rounded_bottom_left: String,
    pub rounded_bottom_right: String,
    pub diamond_apex: String,
    pub dashed: String,
    pub arrow_down: String,
    pub arrow_right: String,
    pub arrow_left: String,
    pub bar_block: String,
    pub title_underline: String,
    pub color_reset: String,
}

impl Theme {
    pub fn unicode() -> Self {
        Self {
            name: "unicode".to_string(),
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
            rounded_top_left: "╭".to_string(),
            rounded_top_right: "╮".to_string(),
            rounded_bottom_left: "╰".to_string(),
            rounded_bottom_right: "╯".to_string(),
            diamond_apex: "◆".to_string(),
            dashed: "-".to_string(),
            arrow_down: "↓".to_string(),
            arrow_right: "→".to_string(),
            arrow_left: "←".to_string(),
            bar_block: "█".to_string(),
            title_underline: "=".to_string(),
            color_reset: "\x1b[0m".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            name: "ascii".to_string(),
            horizontal: "-".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            rounded_top_left: ".".to_string(),
            rounded_top_right: ".".to_string(),
            rounded_bottom_left: "'".to_string(),
            rounded_bottom_right: "'".to_string(),
            diamond_apex: "^".to_string(),
            dashed: ".".to_string(),
            arrow_down: "v".to_string(),
            arrow_right: ">".to_string(),
            arrow_left: "<".to_string(),
            bar_block: "#".to_string(),
            title_underline: "=".to_string(),
            color_reset: "\x1b[0m".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "unicode" | "default" => Some(Self::unicode()),
            "ascii" => Some(Self::ascii()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::unicode()
    }
}
