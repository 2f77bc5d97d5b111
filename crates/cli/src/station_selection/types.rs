//! Type definitions for station selection and UI state.
//!
//! This module defines the types used by the selection menu, including the
//! user's final choice, scroll direction and the state the menu redraws from.

use std::collections::BTreeSet;

/// Represents the outcome of a selection menu.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionChoice {
    /// Indexes into the options passed to the menu, in ascending order
    Selected(Vec<usize>),
    Quit,
}

/// Direction to cycle through options in the selection UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the option list when there are more
/// options than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the selection menu.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position of the cursor within the currently displayed options
    pub selected_index: usize,
    pub viewport: ViewportState,
    pub is_filtering: bool,
    pub filter_text: String,
    /// Option indexes the user has marked
    pub toggled: BTreeSet<usize>,
}

impl UiState {
    #[must_use]
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            selected_index: 0,
            viewport,
            is_filtering: false,
            filter_text: String::new(),
            toggled: BTreeSet::new(),
        }
    }

    /// Marks or unmarks an option.
    pub fn toggle(&mut self, option_index: usize) {
        if !self.toggled.remove(&option_index) {
            self.toggled.insert(option_index);
        }
    }

    /// What confirming now would return: the marked options, or the one under
    /// the cursor when nothing is marked.
    #[must_use]
    pub fn confirmed_selection(&self, indexes_to_display: &[usize]) -> Option<Vec<usize>> {
        if !self.toggled.is_empty() {
            return Some(self.toggled.iter().copied().collect());
        }

        indexes_to_display
            .get(self.selected_index)
            .map(|option_index| vec![*option_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_state() -> UiState {
        UiState::new(ViewportState {
            offset: 0,
            height: 10,
            width: 80,
        })
    }

    #[test]
    fn test_toggle_marks_and_unmarks() {
        let mut state = ui_state();

        state.toggle(3);
        state.toggle(1);
        assert_eq!(state.toggled.iter().copied().collect::<Vec<_>>(), vec![1, 3]);

        state.toggle(3);
        assert_eq!(state.toggled.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_confirmed_selection_prefers_toggled() {
        let mut state = ui_state();
        state.selected_index = 0;
        state.toggle(4);
        state.toggle(2);

        assert_eq!(state.confirmed_selection(&[0, 2, 4]), Some(vec![2, 4]));
    }

    #[test]
    fn test_confirmed_selection_falls_back_to_cursor() {
        let mut state = ui_state();
        state.selected_index = 1;

        assert_eq!(state.confirmed_selection(&[5, 7, 9]), Some(vec![7]));
    }

    #[test]
    fn test_confirmed_selection_nothing_displayed() {
        let state = ui_state();
        assert_eq!(state.confirmed_selection(&[]), None);
    }

    #[test]
    fn test_ui_state_equality() {
        let first = ui_state();
        let mut second = ui_state();
        assert_eq!(first, second);

        second.toggle(0);
        assert_ne!(first, second);
    }
}
