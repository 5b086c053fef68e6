//! Table-view application state

use ratatui::style::Color;

use crate::api::Instance;
use crate::error::{OciError, Result};

/// One rendered instance row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRow {
    pub name: String,
    pub id: String,
    pub shape: String,
    pub status: String,
}

impl InstanceRow {
    /// Placeholder row shown when the typed-in compartment id is unusable
    pub fn invalid_input() -> Self {
        Self {
            name: String::new(),
            id: String::new(),
            shape: String::new(),
            status: "Invalid compartment ID".to_string(),
        }
    }
}

impl From<&Instance> for InstanceRow {
    fn from(instance: &Instance) -> Self {
        Self {
            name: instance.display_name.clone(),
            id: instance.id.clone(),
            shape: instance.shape.clone(),
            status: instance.display_status().to_string(),
        }
    }
}

/// Application state for the instance table view
pub struct App {
    /// Compartment id entry line
    pub input: String,
    /// Current table contents, replaced wholesale on refresh
    pub rows: Vec<InstanceRow>,
    /// Selected row index
    pub selected: usize,
    /// Background color
    pub bg: Color,
    /// Whether keystrokes edit the input line
    pub editing: bool,
    should_quit: bool,
}

impl App {
    pub fn new(compartment_id: &str, bg: Color) -> Self {
        Self {
            input: compartment_id.to_string(),
            rows: Vec::new(),
            selected: 0,
            bg,
            editing: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Replace the table contents and reset the selection
    pub fn set_rows(&mut self, rows: Vec<InstanceRow>) {
        self.rows = rows;
        self.selected = 0;
    }

    /// Show the invalid-input placeholder row
    pub fn set_invalid_input(&mut self) {
        self.set_rows(vec![InstanceRow::invalid_input()]);
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }
}

/// Map a background color name to a terminal color.
///
/// Unknown names are a validation failure, matching the fail-loudly exit
/// behavior of the other flows.
pub fn parse_bg_color(name: &str) -> Result<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "white" => Color::White,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        other => {
            return Err(OciError::Validation(format!(
                "unknown background color '{}'",
                other
            )))
        }
    };
    Ok(color)
}
