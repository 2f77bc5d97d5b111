//! Interactive station selection and user input handling.
//!
//! This module provides the terminal-based user interface for `air`:
//! a multi-select menu over station names and a hidden prompt for the API token.
//!
//! # User Interface
//!
//! The menu supports:
//! - Arrow keys or the mouse wheel to move
//! - Space, Tab or a left click to mark a station
//! - Enter to confirm (the highlighted station when none are marked)
//! - `/` to filter by fuzzy search
//! - `q`, Escape or Ctrl+C to quit

use aqi_core::error::Result;

pub mod input;
pub mod types;
pub mod ui;

pub use input::prompt_hidden;
pub use types::SelectionChoice;
pub use ui::prompt_for_selection;

/// Picks from `options`, skipping the menu when there is exactly one.
pub fn select_options(options: &[String], message: &str) -> Result<SelectionChoice> {
    match options.len() {
        0 => Ok(SelectionChoice::Selected(Vec::new())),
        1 => Ok(SelectionChoice::Selected(vec![0])),
        _ => prompt_for_selection(options, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_without_menu() {
        assert_eq!(
            select_options(&[], "pick").unwrap(),
            SelectionChoice::Selected(vec![])
        );
        assert_eq!(
            select_options(&["Only".to_string()], "pick").unwrap(),
            SelectionChoice::Selected(vec![0])
        );
    }
}
